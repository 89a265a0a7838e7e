use anyhow::anyhow;
use log::info;
use solver::{
    solve_and_render,
    util::{load_maze, output_format, save_maze},
    SolveOutcome, SolverConfig,
};

const USAGE: &str = "usage: solve-maze <input> <output.(bmp|png|jpg)> [--config <file.json>]";

fn main() -> Result<(), anyhow::Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut paths = Vec::new();
    let mut config = SolverConfig::default();

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--config" => {
                let file = args.get(i + 1).ok_or_else(|| anyhow!(USAGE))?;
                config = SolverConfig::from_json_file(file)?;
                i += 2;
            }
            "-h" | "--help" => {
                println!("{}", USAGE);
                return Ok(());
            }
            _ => {
                paths.push(args[i].clone());
                i += 1;
            }
        }
    }

    let [input, output] = paths.as_slice() else {
        return Err(anyhow!(USAGE));
    };

    // reject the output format before doing any work
    output_format(output)?;

    let mut image = load_maze(input)?;
    info!(
        "loaded {} ({}x{})",
        input,
        image.width(),
        image.height()
    );

    match solve_and_render(&mut image, &config) {
        SolveOutcome::NoStartFound => Err(anyhow!("no starting point found")),
        SolveOutcome::NoPathFound(_) => Err(anyhow!("no solution found")),
        SolveOutcome::Solved(solution) => {
            info!(
                "solved: {} cells from {} to {}",
                solution.path.path.len(),
                solution.path.start,
                solution.path.goal
            );
            save_maze(&image, output)?;
            info!("wrote {}", output);
            Ok(())
        }
    }
}
