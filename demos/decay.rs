//! Particle-decay parameter estimation: decay lengths follow an
//! exponential distribution, but only decays between 1 and 20 cm are
//! observable, so each observation is weighted by the conditional
//! exponential pdf on that window.
use empirical::dist::Pmf;
use empirical::suite::{credible_interval, update};

const LOW: f64 = 1.0;
const HIGH: f64 = 20.0;

/// Density of `x` under Exp(`lam`) conditioned on `LOW < x < HIGH`
fn expo_cond_pdf(x: f64, lam: f64) -> f64 {
    let factor = (-LOW * lam).exp() - (-HIGH * lam).exp();
    lam * (-lam * x).exp() / factor
}

fn main() {
    let mut suite = Pmf::uniform(0.001, 1.5, 1000).with_name("posterior");
    let evidence = vec![1.5, 2.0, 3.0, 4.0, 5.0, 12.0];

    let likelihood = |evidence: &Vec<f64>, lam: f64| {
        evidence.iter().map(|&x| expo_cond_pdf(x, lam)).product::<f64>()
    };

    update(&mut suite, &likelihood, &evidence)
        .expect("some rate explains the evidence");

    let naive = evidence.len() as f64 / evidence.iter().sum::<f64>();
    println!("naive parameter estimate:          {:.4}", naive);
    println!("mean of the posterior:             {:.4}", suite.mean());

    let (lo, hi) = credible_interval(&suite, 90.0)
        .expect("posterior has support");
    println!("90% credible interval:             [{:.3}, {:.3}]", lo, hi);
}
