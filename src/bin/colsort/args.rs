use clap::ArgAction;
use colsort::prelude::*;

#[macro_export]
macro_rules! arg {
    ($a:expr,$b:expr,$c:expr,$d:expr) => {
        args::ArgSpec { name: $a, short: $b, value: $c, help: $d }
    };
}

#[derive(Debug)]
pub struct ProgSpec {
    pub help: &'static str,
    pub version: &'static str,
}

impl ProgSpec {
    pub const fn new(help: &'static str) -> Self {
        Self { help, version: env!("CARGO_PKG_VERSION") }
    }
}

/// One command line option. An empty `value` means a flag that takes no value.
#[derive(Debug, Clone, Copy)]
pub struct ArgSpec {
    pub name: &'static str,
    pub short: &'static str,
    pub value: &'static str,
    pub help: &'static str,
}

#[derive(Debug)]
pub struct ArgValue {
    pub name: String,
    pub value: String,
    pub index: usize,
}

impl ArgValue {
    pub fn new(name: &str, value: &str, index: usize) -> Self {
        Self { name: name.to_string(), value: value.to_string(), index }
    }
}

pub fn add_arg(a: clap::Command, x: &ArgSpec) -> clap::Command {
    let mut b = clap::Arg::new(x.name).long(x.name).help(x.help);
    if let Some(ch) = x.short.chars().next() {
        b = b.short(ch);
    }
    if x.value.is_empty() {
        b = b.action(ArgAction::Append).num_args(0).default_missing_value("present");
    } else {
        b = b.value_name(x.value).action(ArgAction::Append);
    }
    a.arg(b)
}

pub fn get_arg(m: &clap::ArgMatches, x: &ArgSpec, v: &mut Vec<ArgValue>) {
    let (Some(vals), Some(ind)) = (m.get_many::<String>(x.name), m.indices_of(x.name)) else {
        return;
    };
    for (val, i) in vals.zip(ind) {
        let val = if x.value.is_empty() { "" } else { val.as_str() };
        v.push(ArgValue::new(x.name, val, i));
    }
}

/// Parse the command line. Help and version requests, and usage errors, exit here.
/// Values come back in command line order.
pub fn parse(prog: &ProgSpec, spec: &[ArgSpec], argv: &[String]) -> Result<Vec<ArgValue>> {
    let mut a = clap::Command::new("colsort")
        .version(prog.version)
        .about(prog.help)
        .disable_help_flag(true)
        .arg(clap::Arg::new("help").long("help").action(ArgAction::Help).help("Print help"));

    for x in spec {
        a = add_arg(a, x);
    }
    let m = a.get_matches_from(argv);
    let mut v: Vec<ArgValue> = Vec::new();
    for x in spec {
        get_arg(&m, x, &mut v);
    }
    v.sort_by(|a, b| a.index.cmp(&b.index));
    Ok(v)
}
