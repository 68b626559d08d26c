use anyhow::Result;
use compensated_accumulators::prelude::*;
use dsi_progress_logger::prelude::*;
use rand::prelude::*;

/// Sums `num_terms` uniform draws in [0, 1e7) followed by their exact
/// negations in the same order. The exact total is zero, so the value left
/// in the accumulator is pure accumulated rounding error.
fn drill(mut sum: impl CompensatedSum, num_terms: usize, seed: u64, pl: &mut impl ProgressLog) {
    pl.item_name("term");
    pl.expected_updates(Some(2 * num_terms));
    pl.start(format!(
        "Summing {} terms with exact total zero...",
        2 * num_terms
    ));

    let start = std::time::Instant::now();
    let mut rng = StdRng::seed_from_u64(seed);
    for _ in 0..num_terms {
        sum.add(rng.random::<f64>() * 1e7);
        pl.light_update();
    }
    let mut rng = StdRng::seed_from_u64(seed);
    for _ in 0..num_terms {
        sum.add(-(rng.random::<f64>() * 1e7));
        pl.light_update();
    }
    let elapsed = start.elapsed().as_secs_f64();

    pl.done();

    pl.info(format_args!("Residual error: {:e}", sum.value()));
    pl.info(format_args!(
        "Rate: {:.3e} additions/s",
        (2 * num_terms) as f64 / elapsed
    ));
}

fn main() -> Result<()> {
    stderrlog::new()
        .verbosity(2)
        .timestamp(stderrlog::Timestamp::Second)
        .init()?;
    let num_terms = std::env::args()
        .nth(2)
        .map(|x| x.parse().expect("Expected integer"))
        .unwrap_or(100_000_000);
    let seed = std::env::args()
        .nth(3)
        .map(|x| x.parse().expect("Expected integer"))
        .unwrap_or(2002);
    let mut main_pl = progress_logger![display_memory = true];
    main_pl.info(format_args!("Starting accuracy drill..."));

    match std::env::args()
        .nth(1)
        .expect("No accumulator provided")
        .as_str()
    {
        "naive" => drill(NaiveSum::new(), num_terms, seed, &mut main_pl),
        "kahan" => drill(KahanSum::new(), num_terms, seed, &mut main_pl),
        "neumaier" => drill(NeumaierSum::new(), num_terms, seed, &mut main_pl),
        "klein" => drill(KleinSum::new(), num_terms, seed, &mut main_pl),
        "pairwise" => drill(PairwiseSum::new(), num_terms, seed, &mut main_pl),
        _ => panic!(),
    }

    Ok(())
}
