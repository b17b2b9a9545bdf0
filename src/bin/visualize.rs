use anyhow::bail;
use gsuffix_tree::{validate, GeneralizedSuffixTree, TreeOptions, Verbosity};
use structopt::StructOpt;

#[derive(StructOpt, Debug)]
#[structopt(name = "visualize", about = "Draws the generalized suffix tree of the given words")]
struct Options {
    /// Log splits and suffix links (-v), and every extension phase (-vv)
    #[structopt(short = "v", long = "verbose", parse(from_occurrences))]
    verbose: u8,
    /// Run every extension phase instead of skipping prefixes already in the tree
    #[structopt(long = "no-skip")]
    no_skip: bool,
    /// Append a distinct terminator to each word
    #[structopt(short = "t", long = "terminate")]
    terminate: bool,
    #[structopt(name = "WORDS", required = true)]
    words: Vec<String>,
}

/// Candidate terminators: a few ASCII symbols, then the private use area.
fn terminators() -> impl Iterator<Item = char> {
    "$#%&!@^*+=~|".chars().chain((0xE000..=0xF8FF).filter_map(std::char::from_u32))
}

fn terminate<I>(words: Vec<String>, candidates: I) -> anyhow::Result<Vec<String>>
where
    I: IntoIterator<Item = char>,
{
    let free: Vec<char> = candidates.into_iter()
        .filter(|&t| !words.iter().any(|w| w.contains(t)))
        .take(words.len())
        .collect();
    if free.len() < words.len() {
        bail!("Only {} terminators are free for {} words", free.len(), words.len());
    }

    Ok(words.into_iter().zip(free).map(|(word, t)| format!("{}{}", word, t)).collect())
}

fn main() -> anyhow::Result<()> {
    let options = Options::from_args();

    let (level, verbosity) = match options.verbose {
        0 => ("warn", Verbosity::Quiet),
        1 => ("debug", Verbosity::Normal),
        _ => ("trace", Verbosity::Verbose),
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let words = if options.terminate {
        terminate(options.words, terminators())?
    } else {
        options.words
    };

    let tree_options = TreeOptions::default()
        .verbosity(verbosity)
        .skip_shared_prefix(!options.no_skip);
    let tree = GeneralizedSuffixTree::from_words_with(tree_options, &words)?;

    print!("{}", tree);
    println!("{} nodes, {} edges, {} leaves", tree.node_count(), tree.edge_count(), tree.leaf_count());
    for check in validate::run_all(&tree) {
        println!("{}", check);
    }

    Ok(())
}
