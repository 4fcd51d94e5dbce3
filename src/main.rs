use idforge::{load_area_data, GenderPref, IdCardGenerator, Logger};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::{env, error::Error};

fn flag(args: &[String], name: &str) -> Option<String> {
    args.iter()
        .find(|arg| arg.starts_with(name))
        .map(|arg| arg.trim_start_matches(name).to_string())
}

fn main() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = env::args().collect();
    let logger = Logger::new(false);

    // Validation needs no dataset at all.
    if let Some(number) = flag(&args, "--validate=") {
        if idforge::generator::checksum::validate(&number) {
            println!("{}: valid", number);
        } else {
            println!("{}: INVALID", number);
        }
        return Ok(());
    }

    let data_path = flag(&args, "--data=").unwrap_or_else(|| "data/area_sample.json".to_string());
    let count: usize = match flag(&args, "--count=") {
        Some(v) => v.parse()?,
        None => 1,
    };
    let gender = match flag(&args, "--gender=") {
        Some(v) => v.parse::<GenderPref>()?,
        None => GenderPref::Any,
    };
    let mut rng = match flag(&args, "--seed=") {
        Some(v) => StdRng::seed_from_u64(v.parse()?),
        None => StdRng::from_os_rng(),
    };

    let records = match load_area_data(&data_path, &logger) {
        Ok(records) => records,
        Err(e) => {
            logger.error(&format!("Failed to initialize generator: {}", e));
            return Err(e.into());
        }
    };
    let generator = IdCardGenerator::new(records);

    for _ in 0..count {
        let record = generator.generate(gender, &mut rng)?;
        println!("{}", serde_json::to_string_pretty(&record)?);
    }
    Ok(())
}
