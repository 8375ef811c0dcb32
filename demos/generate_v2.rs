use flowgen::{generate, render_histogram, PlotOptions};

fn main() {
    println!("=== Azimuthal Flow Generation ===");

    // 100 events, 1000 tracks in each event, v2 = 0.1
    let hist = generate(100, 1000, 0.1);

    println!("\n{}", hist);

    let options = PlotOptions::default();
    match render_histogram(&hist, "v2_rootfunc.jpg", &options) {
        Ok(()) => println!("\nSaved histogram to v2_rootfunc.jpg"),
        Err(e) => {
            eprintln!("Failed to render histogram: {}", e);
            std::process::exit(1);
        }
    }
}
