use std::{
    env,
    fs::File,
    io::{BufRead, BufReader, BufWriter},
};

use anyhow::{bail, Context, Result};

use re2nfa::{fsm::RegexNfa, table::TransitionTable};

fn main() -> Result<()> {
    env_logger::init();

    let mut args = env::args().skip(1);
    let (input_path, output_path) = match (args.next(), args.next()) {
        (Some(input_path), Some(output_path)) => (input_path, output_path),
        _ => bail!("usage: re2nfa <input> <output>"),
    };

    let input = File::open(&input_path).with_context(|| format!("opening {}", input_path))?;
    let regex = BufReader::new(input)
        .lines()
        .next()
        .with_context(|| format!("{} is empty", input_path))?
        .with_context(|| format!("reading {}", input_path))?;

    let mut nfa = RegexNfa::new(&regex);
    nfa.compile()?;
    let table = TransitionTable::extract(&nfa);

    let output = File::create(&output_path).with_context(|| format!("creating {}", output_path))?;
    let mut writer = BufWriter::new(output);
    table
        .write_to(&mut writer)
        .with_context(|| format!("writing {}", output_path))?;

    Ok(())
}
