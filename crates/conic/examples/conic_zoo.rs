//! One conic per type: prints the equation, its type and, when central, the
//! standard form.
//!
//! Run with `cargo run -p conic --example conic_zoo`.

use conic::{Coefficients, ConicSection};

fn main() {
    let zoo: [(&str, [f64; 6]); 10] = [
        ("unit circle", [1.0, 0.0, 1.0, 0.0, 0.0, -1.0]),
        ("x²/4 + y² = 1", [0.25, 0.0, 1.0, 0.0, 0.0, -1.0]),
        ("2x² + y² = -1", [2.0, 0.0, 1.0, 0.0, 0.0, 1.0]),
        ("xy = 1", [0.0, 1.0, 0.0, 0.0, 0.0, -1.0]),
        ("y = x²", [1.0, 0.0, 0.0, 0.0, -1.0, 0.0]),
        ("x² = y²", [1.0, 0.0, -1.0, 0.0, 0.0, 0.0]),
        ("x² + y² = 0", [1.0, 0.0, 1.0, 0.0, 0.0, 0.0]),
        ("x² = 1", [1.0, 0.0, 0.0, 0.0, 0.0, -1.0]),
        ("x² = -1", [1.0, 0.0, 0.0, 0.0, 0.0, 1.0]),
        ("(x - 1)² = 0", [1.0, 0.0, 0.0, -2.0, 0.0, 1.0]),
    ];
    for (name, c) in zoo {
        let conic = ConicSection::from_coefficients(&Coefficients::from(c));
        let kind = match conic.conic_type() {
            Ok(t) => t.to_string(),
            Err(err) => format!("<{err}>"),
        };
        println!("{name:>14}: {conic}  ->  {kind}");
        if let Ok(sf) = conic.standard_form() {
            println!(
                "{:>14}  a={:.4} b={:.4} center=({:.3}, {:.3}) angle={:.4}",
                "",
                sf.a,
                sf.b,
                sf.center.x,
                sf.center.y,
                sf.rotation_angle()
            );
        }
    }
}
