use arraygen::compose::{self, CountedGenerator, WeightedGenerator};
use arraygen::{builder, dimensional, generators, utils};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let ints = builder::integers(8, 0, 100)?;
    println!("integers:    {ints:?}");

    let words = builder::strings((3, 6), 4, 8, false)?;
    println!("strings:     {words:?}");

    let mixed = compose::weighted_generators(
        10,
        vec![
            WeightedGenerator::new(0.7, generators::integer(0, 9)?),
            WeightedGenerator::new(0.3, generators::integer(100, 999)?),
        ],
    )?;
    println!("weighted:    {mixed:?}");

    let grouped = compose::fixed_count_generators(
        6,
        vec![
            CountedGenerator::new(4, generators::uuid()),
            CountedGenerator::new(2, generators::email()),
        ],
        false,
    )?;
    println!("fixed-count: {grouped:?}");

    let nested = dimensional::uniform(7, 3, 2)?;
    println!("nested:      {nested:?}");
    println!("flattened:   {:?}", utils::flatten(nested));

    Ok(())
}
