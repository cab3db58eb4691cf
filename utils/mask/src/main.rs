use std::io::{BufWriter, Write as _};

use clap::Parser;
use words::{Alphabet, AlphabetCodec};

fn main() -> anyhow::Result<()> {
    let opts = Opts::parse();
    let codec = AlphabetCodec::new(Alphabet::new(&opts.alphabet)?);
    let width = codec.alphabet().len();

    let mut stdout = BufWriter::new(std::io::stdout().lock());
    for word in opts.words {
        let stripped = codec.strip(&word);
        let mask = codec.encode(&stripped);
        writeln!(
            &mut stdout,
            "{}: {:0>width$b} ({})",
            word,
            mask,
            codec.decode(mask)
        )?;
    }
    Ok(())
}

/// CLI to print the letter mask of words under an alphabet
#[derive(Parser)]
struct Opts {
    /// Letters of the alphabet, lowest bit first
    #[arg(short, long, default_value = words::LATIN)]
    alphabet: String,

    words: Vec<String>,
}
