// ============================================================================
// Basic Usage Example
// ============================================================================

use my_module::prelude::*;
use my_module::utils::init_logging;

fn main() {
    init_logging();

    let info = module_info();
    println!("=== {} v{} ===\n", info.name, info.version);

    println!("{}", greet(None));
    println!("{}", greet(Some("Rust")));

    println!("\n=== Calculator ===");
    let (a, b) = (7.0, 2.0);
    for op in Operation::ALL {
        match op.apply(a, b) {
            Ok(result) => println!("  {} {} {} = {}", a, op.symbol(), b, result),
            Err(e) => println!("  {} {} {} failed: {}", a, op.symbol(), b, e),
        }
    }

    println!("\n=== Division by zero ===");
    match Calculator::divide(10, 0) {
        Ok(result) => println!("  10 / 0 = {}", result),
        Err(e) => {
            tracing::warn!("Division rejected: {}", e);
            println!("  10 / 0 failed: {}", e);
        },
    }

    println!("\n=== Parsing operations ===");
    for input in ["add", "/", "Multiply", "modulo"] {
        match input.parse::<Operation>() {
            Ok(op) => println!("  '{}' -> {}", input, op),
            Err(e) => println!("  '{}' -> {}", input, e),
        }
    }
}
