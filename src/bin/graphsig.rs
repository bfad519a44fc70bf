//! an executable for hashing labeled graphs into feature vectors
//! example usage:
//! graphsig --mode 7 --maxlen 3 --bits 20 --output vectors.txt --fmap fmap.txt graph1 graph2 graph3
//! graphsig --mode 5 --size 2 graphs/*
//! graphsig --list-modes
//!
//! Each graph is a directory containing nodes.csv (id,label) and edges.csv (source,target).
//! Vectors are written one line per graph : directory name followed by dim:value pairs.
//!


use anyhow::anyhow;
use clap::{Arg, ArgMatches, Command};

use std::path::PathBuf;

use graphsig::prelude::*;


// parses an optional integer argument
fn parse_opt_i64(matches : &ArgMatches, name : &str) -> Result<Option<i64>, anyhow::Error> {
    match matches.value_of(name) {
        Some(str) => {
            let res = str.parse::<i64>();
            match res {
                Ok(val) => Ok(Some(val)),
                _       => Err(anyhow!("error parsing {}", name)),
            }
        },
        _   => Ok(None),
    }
} // end of parse_opt_i64


fn parse_bag_params(matches : &ArgMatches) -> Result<BagParams, anyhow::Error> {
    log::debug!("in parse_bag_params");
    let size = parse_opt_i64(matches, "size")?;
    let depth = parse_opt_i64(matches, "depth")?;
    let maxlen = parse_opt_i64(matches, "maxlen")?;
    Ok(BagParams::new(size, depth, maxlen))
} // end of parse_bag_params


fn parse_hasher_params(matches : &ArgMatches, reverse_index : bool) -> Result<HasherParams, anyhow::Error> {
    log::debug!("in parse_hasher_params");
    let bits = match matches.value_of("bits") {
        Some(str) => {
            let res = str.parse::<u32>();
            match res {
                Ok(val) => val,
                _       => { return Err(anyhow!("error parsing bits")); },
            }
        },
        _   => DEFAULT_BITS,
    };
    let params = HasherParams::new(bits, reverse_index);
    params.check()?;
    Ok(params)
} // end of parse_hasher_params


fn parse_delimiter(matches : &ArgMatches) -> Result<u8, anyhow::Error> {
    match matches.value_of("delim") {
        Some("tab") => Ok(b'\t'),
        Some(str) if str.len() == 1 => Ok(str.as_bytes()[0]),
        Some(str) => Err(anyhow!("delimiter must be one byte or \"tab\", got {}", str)),
        _ => Ok(b','),
    }
}


fn list_modes() {
    for (id, name) in MODE_NAMES.iter() {
        println!("{} : {}", id, name);
    }
}


fn run(matches : &ArgMatches) -> Result<(), anyhow::Error> {
    let bag_params = parse_bag_params(matches)?;
    let mode_id = match parse_opt_i64(matches, "mode")? {
        Some(id) => id,
        None => { return Err(anyhow!("mode is required")); },
    };
    let mode = BagMode::from_id(mode_id, &bag_params)?;
    log::info!("bag mode : {}", mode);
    //
    let output = Output::new(Format::LIBSVM, &matches.value_of("output").map(|s| s.to_string()),
                        &matches.value_of("fmap").map(|s| s.to_string()));
    let hasher_params = parse_hasher_params(matches, output.wants_reverse_index())?;
    let delim = parse_delimiter(matches)?;
    //
    let dirs : Vec<PathBuf> = match matches.values_of("graphs") {
        Some(values) => values.map(PathBuf::from).collect(),
        None => { return Err(anyhow!("no graph directory given")); },
    };
    let graphs = corpus_from_csv(&dirs, delim)?;
    //
    let results = extract_corpus(&graphs, &mode, &hasher_params, &PetgraphAlgorithms);
    let nb_failed = results.iter().filter(|(_, r)| r.is_err()).count();
    output.dump(&results)?;
    if nb_failed > 0 {
        return Err(anyhow!("{} graphs out of {} failed", nb_failed, results.len()));
    }
    Ok(())
} // end of run



pub fn main() {
    //
    graphsig::init_logger();
    //
    let matches = Command::new("graphsig")
        .arg_required_else_help(true)
        .arg(Arg::new("list")
            .long("list-modes")
            .alias("list")
            .takes_value(false)
            .help("list bag modes"))
        .arg(Arg::new("mode")
            .long("mode")
            .short('m')
            .takes_value(true)
            .allow_hyphen_values(true)
            .required_unless_present("list")
            .help("bag mode, an integer between 0 and 7"))
        .arg(Arg::new("size")
            .long("size")
            .takes_value(true)
            .allow_hyphen_values(true)
            .help("neighborhood size in hops (mode 5)"))
        .arg(Arg::new("depth")
            .long("depth")
            .takes_value(true)
            .allow_hyphen_values(true)
            .help("reachability depth in hops (mode 6)"))
        .arg(Arg::new("maxlen")
            .long("maxlen")
            .takes_value(true)
            .allow_hyphen_values(true)
            .help("maximal shortest path length in hops (mode 7)"))
        .arg(Arg::new("bits")
            .long("bits")
            .short('b')
            .takes_value(true)
            .help("vectors have dimension 2^bits, default 24"))
        .arg(Arg::new("output")
            .long("output")
            .short('o')
            .takes_value(true)
            .help("output file, default is stdout"))
        .arg(Arg::new("fmap")
            .long("fmap")
            .takes_value(true)
            .help("file to dump dimension to labels mapping"))
        .arg(Arg::new("delim")
            .long("delim")
            .takes_value(true)
            .help("csv delimiter, a single character or \"tab\", default ','"))
        .arg(Arg::new("graphs")
            .takes_value(true)
            .multiple_values(true)
            .required_unless_present("list")
            .help("graph directories, each with nodes.csv and edges.csv"))
    .get_matches();

    if matches.is_present("list") {
        list_modes();
        return;
    }

    if let Err(e) = run(&matches) {
        log::error!("graphsig failed : {:?}", e);
        eprintln!("graphsig : {}", e);
        std::process::exit(1);
    }
}  // end of main
