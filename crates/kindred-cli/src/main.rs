use kindred::{FamilyTree, Person, RelationshipSet};
use serde::Serialize;
use std::io::Read;

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Json(serde_json::Error),
    Tree(kindred::Error),
    Inconsistent,
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
            CliError::Tree(err) => write!(f, "{err}"),
            CliError::Inconsistent => write!(f, "snapshot has asymmetric relationships"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

impl From<kindred::Error> for CliError {
    fn from(value: kindred::Error) -> Self {
        Self::Tree(value)
    }
}

#[derive(Debug, Clone, Copy, Default)]
enum Command {
    #[default]
    Layout,
    Edges,
    Check,
    Sync,
}

#[derive(Debug, Default)]
struct Args {
    command: Command,
    input: Option<String>,
    pretty: bool,
    out: Option<String>,
    subject: Option<String>,
}

fn usage() -> &'static str {
    "kindred-cli\n\
\n\
USAGE:\n\
  kindred-cli [layout] [--pretty] [--out <path>] [<path>|-]\n\
  kindred-cli edges [--pretty] [--out <path>] [<path>|-]\n\
  kindred-cli check [--pretty] [<path>|-]\n\
  kindred-cli sync [--subject <id>] [--pretty] [--out <path>] [<path>|-]\n\
\n\
NOTES:\n\
  - Input is a JSON array of people. If <path> is omitted or '-',\n\
    input is read from stdin.\n\
  - layout prints positioned nodes plus render edges.\n\
  - edges prints the render edges only.\n\
  - check reports asymmetric relationship bookings; exit code 3 when\n\
    any are found.\n\
  - sync re-applies declared relationships (every person in input\n\
    order, or just --subject) and prints the repaired snapshot.\n\
  - Set RUST_LOG (e.g. RUST_LOG=kindred_core=debug) for diagnostics\n\
    on stderr.\n\
"
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args::default();

    let mut it = argv.iter().skip(1).peekable();
    while let Some(a) = it.next() {
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "layout" => args.command = Command::Layout,
            "edges" => args.command = Command::Edges,
            "check" => args.command = Command::Check,
            "sync" => args.command = Command::Sync,
            "--pretty" => args.pretty = true,
            "--out" => {
                let Some(out) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.out = Some(out.clone());
            }
            "--subject" => {
                let Some(subject) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.subject = Some(subject.clone());
            }
            "--" => {
                if let Some(rest) = it.next() {
                    if args.input.is_some() {
                        return Err(CliError::Usage(usage()));
                    }
                    args.input = Some(rest.clone());
                }
                while it.next().is_some() {
                    return Err(CliError::Usage(usage()));
                }
            }
            other if other.starts_with('-') && other != "-" => {
                return Err(CliError::Usage(usage()));
            }
            path => {
                if args.input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.input = Some(path.to_string());
            }
        }
    }

    Ok(args)
}

fn read_people(input: Option<&str>) -> Result<Vec<Person>, CliError> {
    let text = match input {
        None | Some("-") => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
        Some(path) => std::fs::read_to_string(path)?,
    };
    Ok(serde_json::from_str(&text)?)
}

fn write_json(value: &impl Serialize, pretty: bool, out: Option<&str>) -> Result<(), CliError> {
    let text = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    match out {
        None => println!("{text}"),
        Some(path) => std::fs::write(path, text)?,
    }
    Ok(())
}

/// One missing mirror booking: `person` lists `other` in `field`, but
/// `other` does not list `person` back.
#[derive(Debug, Serialize)]
struct Violation {
    person: String,
    field: &'static str,
    other: String,
}

#[derive(Debug, Serialize)]
struct CheckOut {
    ok: bool,
    violations: Vec<Violation>,
}

fn find_violations(people: &[Person]) -> Vec<Violation> {
    let by_id: std::collections::BTreeMap<&str, &Person> =
        people.iter().map(|p| (p.id.as_str(), p)).collect();
    let mut violations = Vec::new();

    for person in people {
        // Dangling ids are tolerated everywhere else, so they are not
        // violations here either; only one-sided bookings between two
        // known people are.
        for other in &person.children {
            if let Some(o) = by_id.get(other.as_str()) {
                if !o.parents.contains(&person.id) {
                    violations.push(Violation {
                        person: person.id.clone(),
                        field: "children",
                        other: other.clone(),
                    });
                }
            }
        }
        for other in &person.parents {
            if let Some(o) = by_id.get(other.as_str()) {
                if !o.children.contains(&person.id) {
                    violations.push(Violation {
                        person: person.id.clone(),
                        field: "parents",
                        other: other.clone(),
                    });
                }
            }
        }
        for other in &person.spouse {
            if let Some(o) = by_id.get(other.as_str()) {
                if !o.spouse.contains(&person.id) {
                    violations.push(Violation {
                        person: person.id.clone(),
                        field: "spouse",
                        other: other.clone(),
                    });
                }
            }
        }
    }

    violations
}

fn run(args: Args) -> Result<(), CliError> {
    let people = read_people(args.input.as_deref())?;

    match args.command {
        Command::Layout => {
            let layout = kindred::compute_tree_layout(&people);
            write_json(&layout, args.pretty, args.out.as_deref())
        }
        Command::Edges => {
            let edges = kindred::project_edges(&people);
            write_json(&edges, args.pretty, args.out.as_deref())
        }
        Command::Check => {
            let violations = find_violations(&people);
            let report = CheckOut {
                ok: violations.is_empty(),
                violations,
            };
            write_json(&report, args.pretty, args.out.as_deref())?;
            if report.ok {
                Ok(())
            } else {
                Err(CliError::Inconsistent)
            }
        }
        Command::Sync => {
            let subjects: Vec<(String, RelationshipSet)> = people
                .iter()
                .filter(|p| {
                    args.subject
                        .as_deref()
                        .is_none_or(|subject| p.id == subject)
                })
                .map(|p| (p.id.clone(), p.relationships()))
                .collect();
            if args.subject.is_some() && subjects.is_empty() {
                return Err(CliError::Usage("--subject matches no person in the input"));
            }
            let mut tree = FamilyTree::from_snapshot(people);
            for (id, set) in &subjects {
                tree.apply_relationships(id, set)?;
            }
            write_json(&tree.people(), args.pretty, args.out.as_deref())
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = match parse_args(&std::env::args().collect::<Vec<_>>()) {
        Ok(v) => v,
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    match run(args) {
        Ok(()) => {}
        Err(CliError::Inconsistent) => {
            eprintln!("{}", CliError::Inconsistent);
            std::process::exit(3);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}
