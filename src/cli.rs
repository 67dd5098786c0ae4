//! CLI parsing and command dispatch.

use std::{env, path::PathBuf};

use clap::{CommandFactory, Parser, ValueEnum, value_parser};

use crate::{
    commands::{self, ColorChoice, Context, field::Field},
    config::Config,
    decorate,
    diagnostics::Diagnostics,
    error::Result,
    loader::{self, JSON_FILE_NAME, Origin, TEXT_FILE_NAME},
    paths::display_path,
    render::{Charset, Layout},
    resume::SectionKind,
};

/// Parsed command line arguments.
///
/// Every action is a flag; the first one found in [`ACTIONS`] order wins.
#[derive(Debug, Parser)]
#[command(
    name = "resume",
    version,
    about = "Show a resume in the terminal",
    args_override_self = true
)]
struct Cli {
    /// Print the name.
    #[arg(long)]
    name: bool,
    /// Print the email address.
    #[arg(long)]
    email: bool,
    /// Print the phone number.
    #[arg(long)]
    phone: bool,
    /// Print the location.
    #[arg(long)]
    location: bool,
    /// Show the skills section.
    #[arg(long)]
    skills: bool,
    /// Show projects; pass a number or part of a name to pick one.
    #[arg(long, value_name = "QUERY", num_args = 0..=1, default_missing_value = "")]
    projects: Option<String>,
    /// Show the achievements section.
    #[arg(long)]
    achievements: bool,
    /// Show the contact block.
    #[arg(long)]
    contact: bool,
    /// Show the education section.
    #[arg(long)]
    education: bool,
    /// Print the portfolio URL.
    #[arg(long)]
    portfolio: bool,
    /// Print the GitHub profile URL.
    #[arg(long)]
    github: bool,
    /// Print the plain-text resume to stdout.
    #[arg(long)]
    download: bool,
    /// Save the plain-text resume to a file.
    #[arg(long, value_name = "FILE", num_args = 0..=1, default_missing_value = "")]
    save: Option<String>,
    /// List links; pass text to filter them.
    #[arg(long, value_name = "QUERY", num_args = 0..=1, default_missing_value = "")]
    links: Option<String>,
    /// Print the resume as JSON.
    #[arg(long)]
    json: bool,
    /// Print the resume in the JSON Resume schema.
    #[arg(long)]
    json_resume: bool,
    /// Use ASCII characters only.
    #[arg(long)]
    ascii: bool,
    /// Use Unicode bullets and box drawing.
    #[arg(long)]
    unicode: bool,
    /// Disable colored output.
    #[arg(long)]
    no_color: bool,
    /// Plain output: no box, no color, no banner.
    #[arg(long)]
    plain: bool,
    /// Use this percentage of the terminal width.
    #[arg(long, value_name = "N", value_parser = value_parser!(u16).range(1..=100))]
    width_perc: Option<u16>,
    /// Draw the name as a large-text banner.
    #[arg(long)]
    banner: bool,
    /// Control colored output.
    #[arg(long, value_enum, default_value = "auto")]
    color: ColorMode,
    /// Directory containing resume.json or resume.txt.
    #[arg(long, value_name = "DIR")]
    data_dir: Option<PathBuf>,
    /// Enable verbose output.
    #[arg(long)]
    verbose: bool,
    /// Stray values left behind by ignored flags.
    #[arg(hide = true)]
    ignored: Vec<String>,
}

/// Supported color output modes.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum ColorMode {
    /// Only colorize when stdout is a TTY.
    Auto,
    /// Always colorize output.
    Always,
    /// Never colorize output.
    Never,
}

/// Actions selectable by flags.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Action {
    /// Write the plain-text export to a file.
    Save(String),
    /// Print the plain-text export.
    Download,
    /// Print JSON Resume output.
    JsonResume,
    /// Print the record as JSON.
    Json,
    /// Show the contact block.
    Contact,
    /// Print a single field.
    Field(Field),
    /// List links matching a query.
    Links(String),
    /// Show projects matching a query.
    Projects(String),
    /// Show every section of a kind.
    Section(SectionKind),
    /// Show the whole resume.
    Show,
}

/// Probe for one action flag.
type ActionProbe = fn(&Cli) -> Option<Action>;

/// Action flags in dispatch priority order - the first match wins.
const ACTIONS: &[ActionProbe] = &[
    |cli| cli.save.clone().map(Action::Save),
    |cli| cli.download.then_some(Action::Download),
    |cli| cli.json_resume.then_some(Action::JsonResume),
    |cli| cli.json.then_some(Action::Json),
    |cli| cli.contact.then_some(Action::Contact),
    |cli| cli.name.then_some(Action::Field(Field::Name)),
    |cli| cli.email.then_some(Action::Field(Field::Email)),
    |cli| cli.phone.then_some(Action::Field(Field::Phone)),
    |cli| cli.location.then_some(Action::Field(Field::Location)),
    |cli| cli.github.then_some(Action::Field(Field::Github)),
    |cli| cli.portfolio.then_some(Action::Field(Field::Portfolio)),
    |cli| cli.links.clone().map(Action::Links),
    |cli| cli.skills.then_some(Action::Section(SectionKind::Skills)),
    |cli| cli.projects.clone().map(Action::Projects),
    |cli| cli.education.then_some(Action::Section(SectionKind::Education)),
    |cli| cli.achievements.then_some(Action::Section(SectionKind::Achievements)),
];

/// Flags clap always understands.
const BUILTIN_FLAGS: &[&str] = &["help", "version"];

/// Run the requested command.
pub async fn run() -> Result<()> {
    let cli = Cli::parse_from(retain_known_args(env::args()));
    let mut diagnostics = Diagnostics::new(cli.verbose);
    if !cli.ignored.is_empty() {
        diagnostics.note(format!("Ignoring arguments: {}", cli.ignored.join(" ")));
    }

    let config = Config::load()?;
    let data_dir = cli.data_dir.clone().unwrap_or_else(|| config.data_dir());
    let loaded = loader::load(&data_dir, &mut diagnostics).await?;
    match &loaded.origin {
        Origin::File(path) => diagnostics.note(format!("Loaded {}", display_path(path))),
        Origin::Embedded => diagnostics.note(format!(
            "No {JSON_FILE_NAME} or {TEXT_FILE_NAME} in {}; showing the built-in resume",
            display_path(&data_dir)
        )),
    }
    let mut context = Context {
        resume: loaded.resume,
        layout: resolve_layout(&cli, &config),
        diagnostics,
    };

    let result = dispatch(select_action(&cli), &mut context).await;
    context.diagnostics.print_warning_summary();
    result
}

/// Pick the action for the parsed flags.
fn select_action(cli: &Cli) -> Action {
    ACTIONS
        .iter()
        .find_map(|probe| probe(cli))
        .unwrap_or(Action::Show)
}

/// Run an action.
async fn dispatch(action: Action, context: &mut Context) -> Result<()> {
    match action {
        Action::Save(file) => commands::export::save(context, &file).await,
        Action::Download => commands::export::download(context).await,
        Action::JsonResume => commands::export::json_resume(context).await,
        Action::Json => commands::export::json(context).await,
        Action::Contact => commands::contact::run(context).await,
        Action::Field(field) => commands::field::run(context, field).await,
        Action::Links(query) => commands::links::run(context, &query).await,
        Action::Projects(query) => commands::section::projects(context, &query).await,
        Action::Section(kind) => commands::section::run(context, kind).await,
        Action::Show => commands::show::run(context).await,
    }
}

/// Combine flags and config into presentation settings.
fn resolve_layout(cli: &Cli, config: &Config) -> Layout {
    let charset = if cli.ascii {
        Charset::Ascii
    } else if cli.unicode || !config.ascii() {
        Charset::Unicode
    } else {
        Charset::Ascii
    };

    let choice = if cli.plain || cli.no_color {
        ColorChoice::Never
    } else {
        match cli.color {
            ColorMode::Always => ColorChoice::Always,
            ColorMode::Never => ColorChoice::Never,
            ColorMode::Auto if !config.color() => ColorChoice::Never,
            ColorMode::Auto => ColorChoice::Auto,
        }
    };
    let color = choice.enabled();

    let percent = cli.width_perc.or(config.width_percent()).unwrap_or(100);
    let width = textwrap::termwidth() * usize::from(percent) / 100;

    Layout {
        width,
        charset,
        color,
        boxed: !cli.plain,
        banner: !cli.plain && (cli.banner || config.banner()),
        gradient: color && decorate::supports_truecolor(),
    }
}

/// Drop flags the CLI does not define so they are ignored instead of fatal.
///
/// Values that followed an unknown flag stay behind and are collected by the
/// hidden `ignored` positional.
fn retain_known_args(args: impl IntoIterator<Item = String>) -> Vec<String> {
    let command = Cli::command();
    let longs: Vec<&str> = command
        .get_arguments()
        .filter_map(|arg| arg.get_long())
        .chain(BUILTIN_FLAGS.iter().copied())
        .collect();

    let mut args = args.into_iter();
    let mut kept: Vec<String> = args.next().into_iter().collect();
    for arg in args {
        let known = if let Some(flag) = arg.strip_prefix("--") {
            let name = flag.split('=').next().unwrap_or_default();
            longs.contains(&name)
        } else if arg.starts_with('-') && arg.len() > 1 {
            matches!(arg.as_str(), "-h" | "-V")
        } else {
            true
        };
        if known {
            kept.push(arg);
        }
    }
    kept
}

#[cfg(test)]
mod tests {
    use std::iter;

    use clap::Parser;

    use super::{Action, Cli, retain_known_args, select_action};
    use crate::{commands::field::Field, resume::SectionKind};

    fn parse(args: &[&str]) -> Cli {
        let args = iter::once("resume")
            .chain(args.iter().copied())
            .map(str::to_string);
        Cli::parse_from(retain_known_args(args))
    }

    #[test]
    fn defaults_to_show() {
        assert_eq!(select_action(&parse(&[])), Action::Show);
        assert_eq!(select_action(&parse(&["--ascii", "--plain"])), Action::Show);
    }

    #[test]
    fn optional_values_default_to_empty() {
        assert_eq!(
            select_action(&parse(&["--projects"])),
            Action::Projects(String::new())
        );
        assert_eq!(
            select_action(&parse(&["--projects", "1"])),
            Action::Projects("1".to_string())
        );
        assert_eq!(
            select_action(&parse(&["--links=git"])),
            Action::Links("git".to_string())
        );
        assert_eq!(select_action(&parse(&["--save"])), Action::Save(String::new()));
    }

    #[test]
    fn first_action_in_table_wins() {
        assert_eq!(
            select_action(&parse(&["--skills", "--email"])),
            Action::Field(Field::Email)
        );
        assert_eq!(
            select_action(&parse(&["--achievements", "--education"])),
            Action::Section(SectionKind::Education)
        );
        assert_eq!(
            select_action(&parse(&["--json", "--save=x.txt"])),
            Action::Save("x.txt".to_string())
        );
    }

    #[test]
    fn unknown_flags_are_ignored() {
        let cli = parse(&["--frobnicate", "value", "-z", "--skills"]);
        assert_eq!(select_action(&cli), Action::Section(SectionKind::Skills));
        assert_eq!(cli.ignored, ["value"]);
    }

    #[test]
    fn repeated_flags_are_accepted() {
        assert_eq!(
            select_action(&parse(&["--skills", "--skills"])),
            Action::Section(SectionKind::Skills)
        );
        assert_eq!(
            select_action(&parse(&["--name", "--name"])),
            Action::Field(Field::Name)
        );
        assert_eq!(
            select_action(&parse(&["--projects", "1", "--projects", "2"])),
            Action::Projects("2".to_string())
        );
        assert_eq!(parse(&["--width-perc=50", "--width-perc=70"]).width_perc, Some(70));
    }

    #[test]
    fn parses_width_percentage() {
        assert_eq!(parse(&["--width-perc=60"]).width_perc, Some(60));
        assert_eq!(parse(&["--width-perc", "100"]).width_perc, Some(100));
    }
}
