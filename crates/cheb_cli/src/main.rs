use cheb_poly::{
    Recurrence, chebyshev_to_monomial, evaluate_chebyshev_series, evaluate_polynomial,
    generate_basis, linear_combination,
};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "cheb", about = "Chebyshev polynomial CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print T_0 .. T_{count-1} in monomial form
    Basis {
        /// Number of polynomials
        count: usize,
    },
    /// Evaluate a monomial-basis polynomial (Horner)
    PolyEval {
        /// Coefficients, lowest degree first (e.g. 1,2,3)
        #[arg(long, allow_hyphen_values = true)]
        coeffs: String,
        /// Evaluation point
        #[arg(long, allow_hyphen_values = true)]
        x: f64,
    },
    /// Weighted sum of polynomials
    Combine {
        /// Polynomials separated by ';' (e.g. "1;0,2;-1,0,4")
        #[arg(long, allow_hyphen_values = true)]
        polys: String,
        /// One weight per polynomial
        #[arg(long, allow_hyphen_values = true)]
        weights: String,
    },
    /// Evaluate a Chebyshev series with the Clenshaw recurrence
    Series {
        /// Series coefficients c_0, c_1, ...
        #[arg(long, allow_hyphen_values = true)]
        coeffs: String,
        /// Evaluation point
        #[arg(long, allow_hyphen_values = true)]
        x: f64,
        /// Also print the monomial expansion and its Horner value
        #[arg(long)]
        expand: bool,
    },
    /// Evaluate a series in an arbitrary three-term-recurrence basis
    Clenshaw {
        /// Series coefficients c_0, c_1, ...
        #[arg(long, allow_hyphen_values = true)]
        coeffs: String,
        /// Evaluation point
        #[arg(long, allow_hyphen_values = true)]
        x: f64,
        /// T_0(x) as a monomial polynomial
        #[arg(long, allow_hyphen_values = true, default_value = "1")]
        basis0: String,
        /// T_1(x) as a monomial polynomial
        #[arg(long, allow_hyphen_values = true, default_value = "0,2")]
        basis1: String,
        /// alpha(x) in T_k = alpha*T_{k-1} + beta*T_{k-2}
        #[arg(long, allow_hyphen_values = true, default_value = "0,2")]
        alpha: String,
        /// beta(x) in T_k = alpha*T_{k-1} + beta*T_{k-2}
        #[arg(long, allow_hyphen_values = true, default_value = "-1")]
        beta: String,
    },
}

fn parse_list(s: &str) -> Result<Vec<f64>, String> {
    let s = s.trim();
    if s.is_empty() {
        return Ok(Vec::new());
    }
    s.split(',')
        .map(|part| {
            let part = part.trim();
            part.parse::<f64>()
                .map_err(|e| format!("invalid number '{part}': {e}"))
        })
        .collect()
}

fn require_list(s: &str) -> Vec<f64> {
    parse_list(s).unwrap_or_else(|e| {
        eprintln!("Invalid coefficient list: {e}");
        std::process::exit(1);
    })
}

fn format_poly(poly: &[f64]) -> String {
    let parts: Vec<String> = poly.iter().map(|c| c.to_string()).collect();
    format!("[{}]", parts.join(", "))
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Basis { count } => {
            for (k, poly) in generate_basis(count).iter().enumerate() {
                println!("T_{k}: {}", format_poly(poly));
            }
        }

        Commands::PolyEval { coeffs, x } => {
            let poly = require_list(&coeffs);
            println!("{}", evaluate_polynomial(&poly, x));
        }

        Commands::Combine { polys, weights } => {
            let polys: Vec<Vec<f64>> = polys.split(';').map(require_list).collect();
            let weights = require_list(&weights);
            match linear_combination(&polys, &weights) {
                Ok(poly) => println!("{}", format_poly(&poly)),
                Err(e) => {
                    eprintln!("Failed to combine polynomials: {e}");
                    std::process::exit(1);
                }
            }
        }

        Commands::Series { coeffs, x, expand } => {
            let coeffs = require_list(&coeffs);
            println!("{}", evaluate_chebyshev_series(&coeffs, x));
            if expand {
                let mono = chebyshev_to_monomial(&coeffs);
                println!("Monomial: {}", format_poly(&mono));
                println!("Horner:   {}", evaluate_polynomial(&mono, x));
            }
        }

        Commands::Clenshaw {
            coeffs,
            x,
            basis0,
            basis1,
            alpha,
            beta,
        } => {
            let rec = Recurrence::new(
                require_list(&basis0),
                require_list(&basis1),
                require_list(&alpha),
                require_list(&beta),
            );
            println!("{}", rec.evaluate(&require_list(&coeffs), x));
        }
    }
}
