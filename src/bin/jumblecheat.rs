extern crate clap;

use std::io::{self, BufReader, BufRead, Read};
use std::process::exit;
use clap::{Arg, App, SubCommand};


use jumblecheat::*;

fn output_words_as_tsv(input: &str, words: &[String]) {
    print!("{}", input);
    for word in words {
        print!("\t{}", word);
    }
    println!();
}

fn output_words_as_json(input: &str, words: &[String], seqnr: usize) {
    if seqnr > 1 {
        println!(",")
    }
    print!("    {{ \"input\": \"{}\", \"words\": [", escape_json(input));
    for (i, word) in words.iter().enumerate() {
        if i > 0 {
            print!(", ");
        }
        print!("\"{}\"", escape_json(word));
    }
    print!("] }}");
}

fn escape_json(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '"' => escaped.push_str("\\\""),
            '\\' => escaped.push_str("\\\\"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            c if (c as u32) < 0x20 => escaped.push_str(&format!("\\u{:04x}", c as u32)),
            c => escaped.push(c),
        }
    }
    escaped
}

fn process_lines(solver: &JumbleSolver, inputstream: impl Read, json: bool, seqnr: &mut usize) -> Result<(), io::Error> {
    let f_buffer = BufReader::new(inputstream);
    for line in f_buffer.lines() {
        let line = line?;
        let letters = line.trim();
        if !letters.is_empty() {
            process(solver, &[letters], json, seqnr);
        }
    }
    Ok(())
}

fn process(solver: &JumbleSolver, inputs: &[&str], json: bool, seqnr: &mut usize) {
    let results = solver.find_words_batch(inputs);
    for (input, words) in inputs.iter().zip(results.iter()) {
        *seqnr += 1;
        if json {
            output_words_as_json(input, words, *seqnr);
        } else {
            output_words_as_tsv(input, words);
        }
    }
}

pub fn common_arguments<'a,'b>() -> Vec<clap::Arg<'a,'b>> {
    let mut args: Vec<Arg> = Vec::new();
    args.push( Arg::with_name("lexicon")
        .long("lexicon")
        .short("l")
        .help("Lexicon (word list) from which all words are drawn. The lexicon should contain one word per line, or be a tab separated file with the word in the column indicated by --column. This option may be used multiple times for multiple lexicons.")
        .takes_value(true)
        .number_of_values(1)
        .multiple(true)
        .required(true));
    args.push(Arg::with_name("column")
        .long("column")
        .help("Column (0-indexed) in the lexicon files that holds the word")
        .takes_value(true)
        .default_value("0"));
    args
}

pub fn query_arguments<'a,'b>() -> Vec<clap::Arg<'a,'b>> {
    let mut args: Vec<Arg> = Vec::new();
    args.push(Arg::with_name("min_length")
        .long("min-length")
        .short("m")
        .help("Minimum length of words to return")
        .takes_value(true)
        .default_value("3"));
    args.push(Arg::with_name("max_matches")
        .long("max-matches")
        .short("n")
        .help("Number of words to return per input, the longest words are kept (set to 0 for unlimited)")
        .takes_value(true)
        .default_value("0"));
    args.push(Arg::with_name("ignore-case-sort")
        .long("ignore-case-sort")
        .help("Ignore case when ordering words of equal length (by default uppercase sorts before lowercase)")
        .required(false));
    args.push(Arg::with_name("single-thread")
        .long("single-thread")
        .help("Use only a single thread")
        .required(false));
    args.push(Arg::with_name("json")
        .long("json")
        .short("j")
        .help("Output json instead of tsv")
        .required(false));
    args.push(Arg::with_name("letters")
        .help("Letter sets to find words for (usually seven letters each). If none are given, letter sets are read from standard input, one per line")
        .takes_value(true)
        .multiple(true)
        .required(false));
    args
}

fn parse_number<T: std::str::FromStr>(args: &clap::ArgMatches, name: &str) -> T {
    match args.value_of(name).map(|value| value.parse::<T>()) {
        Some(Ok(value)) => value,
        _ => {
            eprintln!("ERROR: --{} should be a non-negative integer", name.replace('_', "-"));
            exit(1);
        }
    }
}

fn main() {
    let rootargs = App::new("Jumblecheat")
                    .version("0.1")
                    .author("Maarten van Gompel (proycon) <proycon@anaproy.nl>")
                    .about("Finds all words in a lexicon that can be formed from a set of letters")
                    .subcommand(
                        SubCommand::with_name("query")
                            .about("Find all words in the lexicon that can be formed from the letters provided in the input")
                            .args(&common_arguments())
                            .args(&query_arguments())
                    )
                    .subcommand(
                        SubCommand::with_name("index")
                            .about("Compute and output the anagram index")
                            .args(&common_arguments())
                    )
                    .arg(Arg::with_name("debug")
                        .long("debug")
                        .short("D")
                        .help("Debug")
                        .required(false))
                    .get_matches();

    let debug = rootargs.is_present("debug");

    let args = if let Some(args) = rootargs.subcommand_matches("query") {
        args
    } else if let Some(args) = rootargs.subcommand_matches("index") {
        args
    } else {
        eprintln!("ERROR: No command specified, use query or index (see --help)");
        exit(1);
    };

    let lexiconparams = LexiconParams {
        text_column: parse_number::<u8>(args, "column"),
    };

    eprintln!("Loading lexicons...");
    let mut lexicon = Lexicon::new(debug);
    for filename in args.values_of("lexicon").into_iter().flatten() {
        if let Err(e) = lexicon.read_file(filename, &lexiconparams) {
            eprintln!("ERROR: Unable to read lexicon {}: {}", filename, e);
            exit(1);
        }
    }

    if rootargs.subcommand_matches("index").is_some() {
        eprintln!("Computing and outputting anagram index...");
        let index = AnagramIndex::build(lexicon.entries, debug);
        let mut signatures: Vec<&Signature> = index.index.keys().collect();
        signatures.sort_unstable();
        for signature in signatures {
            print!("{}", signature);
            for word in index.lookup(signature) {
                print!("\t{}", word);
            }
            println!()
        }
        return;
    }

    let mut params = SearchParameters::default()
        .with_min_length(parse_number::<usize>(args, "min_length"))
        .with_max_matches(parse_number::<usize>(args, "max_matches"));
    if args.is_present("ignore-case-sort") {
        params = params.with_sort_order(SortOrder::CaseInsensitive);
    }
    if args.is_present("single-thread") {
        params = params.with_single_thread();
    }
    let json = args.is_present("json");

    eprintln!("Building index...");
    let solver = JumbleSolver::new(&lexicon, params, debug);

    if json {
        println!("[");
    }

    let mut seqnr = 0;
    if let Some(letters) = args.values_of("letters") {
        let inputs: Vec<&str> = letters.collect();
        process(&solver, &inputs, json, &mut seqnr);
    } else {
        eprintln!("(accepting standard input; enter letters, one set per line)");
        if let Err(e) = process_lines(&solver, io::stdin(), json, &mut seqnr) {
            eprintln!("ERROR: Unable to read standard input: {}", e);
            exit(1);
        }
    }

    if json {
        if seqnr > 0 {
            println!();
        }
        println!("]");
    }
}
