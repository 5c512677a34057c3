//! The locomotive problem, from Mosteller, "Fifty Challenging Problems in
//! Probability": a railroad numbers its locomotives in order 1..N. One day
//! you see a locomotive with the number 60. Estimate how many locomotives
//! the railroad has.
use empirical::dist::{Cdf, Pmf};
use empirical::suite::{credible_interval, estimate_parameter};

fn main() {
    let upper_bound = 200.0;
    let prior =
        Pmf::uniform(1.0, upper_bound, upper_bound as usize).with_name("prior");

    // Seeing number `seen` is impossible if there are fewer than `seen`
    // locomotives, and has probability 1/n otherwise.
    let likelihood =
        |&seen: &f64, n: f64| if seen > n { 0.0 } else { 1.0 / n };

    let posterior =
        estimate_parameter(&prior, &likelihood, &60.0, "posterior")
            .expect("the evidence is possible under some hypothesis");

    println!("posterior mean:        {:.1}", posterior.mean());

    let cdf = Cdf::from_pmf(&posterior);
    println!(
        "posterior median:      {:.0}",
        cdf.value(0.5).expect("posterior has support")
    );

    let (lo, hi) = credible_interval(&posterior, 90.0)
        .expect("posterior has support");
    println!("90% credible interval: [{:.0}, {:.0}]", lo, hi);
}
