//! MacKay, "Information Theory, Inference, and Learning Algorithms",
//! exercise 3.15: when spun on edge 250 times, a Belgian one-euro coin
//! came up heads 140 times and tails 110. Do these data give evidence
//! that the coin is biased rather than fair?
use empirical::dist::Pmf;
use empirical::suite::{credible_interval, estimate_parameter};

fn main() {
    // A suite of hypotheses for p, the probability of heads
    let prior = Pmf::uniform(0.0, 1.0, 101);

    let binomial = |&(heads, tails): &(i32, i32), p: f64| {
        p.powi(heads) * (1.0 - p).powi(tails)
    };

    let posterior =
        estimate_parameter(&prior, &binomial, &(140, 110), "posterior")
            .expect("some hypothesis fits the evidence");

    println!("posterior mean of p(heads): {:.4}", posterior.mean());
    println!(
        "posterior sd:                {:.4}",
        posterior.variance().sqrt()
    );

    let (lo, hi) = credible_interval(&posterior, 90.0)
        .expect("posterior has support");
    println!("90% credible interval:       [{:.2}, {:.2}]", lo, hi);
    println!(
        "P(p > 0.5 | data):           {:.4}",
        posterior
            .items()
            .iter()
            .filter(|&&(p, _)| p > 0.5)
            .map(|&(_, mass)| mass)
            .sum::<f64>()
    );
}
