use std::{
    env,
    fs::{File, OpenOptions},
    io::{self, BufRead, IsTerminal, Read, Write},
    path::{Path, PathBuf},
    process::ExitCode,
    time::Instant,
};

use loxparse::parse;

const USAGE: &str = "\
Usage: loxparse [options] [script]

Options:
  -c string
    \tProgram passed in as string
  -p\tPrint the AST
  -v\tReport how long parsing took";

#[derive(Default)]
struct Options {
    command: Option<String>,
    print_ast: bool,
    verbose: bool,
    script: Option<String>,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Options, String> {
    let mut options = Options::default();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-c" => match args.next() {
                Some(command) => options.command = Some(command),
                None => return Err(String::from("flag needs an argument: -c")),
            },
            "-p" => options.print_ast = true,
            "-v" => options.verbose = true,
            flag if flag.starts_with('-') && flag.len() > 1 => {
                return Err(format!("flag provided but not defined: {}", flag))
            }
            _ => {
                if options.script.is_some() {
                    return Err(String::from("only one script may be given"));
                }
                options.script = Some(arg);
            }
        }
    }

    Ok(options)
}

fn main() -> ExitCode {
    let options = match parse_args(env::args().skip(1)) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("{}", message);
            eprintln!("{}", USAGE);
            return ExitCode::from(2);
        }
    };

    let color = io::stderr().is_terminal() && env::var_os("NO_COLOR").is_none();

    let ok = if let Some(command) = &options.command {
        run(command.as_bytes(), "<string>", &options, color)
    } else if let Some(script) = &options.script {
        match File::open(script) {
            Ok(file) => run(file, script, &options, color),
            Err(err) => {
                eprintln!("{}: {}", script, err);
                false
            }
        }
    } else {
        match run_repl(&options, color) {
            Ok(()) => true,
            Err(err) => {
                eprintln!("running Lox REPL: {}", err);
                false
            }
        }
    };

    if ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

/// Parses one source, printing the AST if asked and any errors to stderr.
fn run<R: Read>(reader: R, file: &str, options: &Options, color: bool) -> bool {
    let start = Instant::now();
    let (program, result) = parse(reader, file);

    if options.verbose {
        eprintln!("Parsed in {:?}", start.elapsed());
    }

    if options.print_ast && !program.is_empty() {
        println!("{}", program);
    }

    match result {
        Ok(()) => true,
        Err(err) => {
            eprintln!("{}", err.render(color));
            false
        }
    }
}

fn run_repl(options: &Options, color: bool) -> io::Result<()> {
    let history = history_path();
    if history.is_none() {
        eprintln!("Can't find the home directory. Command history will not be saved.");
    }

    let stdin = io::stdin();
    let mut input = stdin.lock();

    loop {
        print!(">>> ");
        io::stdout().flush()?;

        let mut line = Vec::new();
        if input.read_until(b'\n', &mut line)? == 0 {
            println!();
            return Ok(());
        }
        let line = trim_line_ending(&line);

        if !line.iter().all(u8::is_ascii_whitespace) {
            if let Some(path) = &history {
                append_history(path, &String::from_utf8_lossy(line));
            }
        }

        run(line, "<stdin>", options, color);
    }
}

/// Lines are kept as raw bytes so invalid UTF-8 reaches the parser, which
/// reports it like any other bad input.
fn trim_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

fn history_path() -> Option<PathBuf> {
    env::var_os("HOME").map(|home| PathBuf::from(home).join(".lox_history"))
}

fn append_history(path: &Path, line: &str) {
    let result = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .and_then(|mut file| writeln!(file, "{}", line));

    if let Err(err) = result {
        eprintln!("Can't write to {}: {}", path.display(), err);
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_args, trim_line_ending};

    #[test]
    fn test_trim_line_ending_keeps_invalid_utf8() {
        assert_eq!(trim_line_ending(b"print \xff;\r\n"), b"print \xff;");
        assert_eq!(trim_line_ending(b"print 1;\n"), b"print 1;");
        assert_eq!(trim_line_ending(b"print 1;"), b"print 1;");
    }

    #[test]
    fn test_parse_args() {
        let args = ["-p", "-c", "print 1;"].map(String::from);
        let options = parse_args(args.into_iter()).unwrap();
        assert!(options.print_ast);
        assert_eq!(options.command.as_deref(), Some("print 1;"));
        assert!(options.script.is_none());

        assert!(parse_args(["-c"].map(String::from).into_iter()).is_err());
        assert!(parse_args(["-x"].map(String::from).into_iter()).is_err());
        assert!(parse_args(["a.lox", "b.lox"].map(String::from).into_iter()).is_err());
    }
}
