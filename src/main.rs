use spillstat::run_main;

fn main() {
    if let Err(err) = run_main() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
