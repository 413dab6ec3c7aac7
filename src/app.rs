use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};

use crate::cli::{Cli, Commands, ExportFormat};
use crate::core::{
    DailyEntry, DateFilterState, NewEntry, Platform, Project, ProjectSelection, RangeOption,
    daily_series, day_string, overview, platform_breakdown, project_view, select,
};
use crate::error::AppError;
use crate::labels::{platform_label, project_label};
use crate::output::{
    NumberFormat, Report, ViewOptions, output_daily_json, output_entry_json, output_platform_json,
    output_range_json, output_report_json, print_daily_table, print_entry_list,
    print_platform_table, print_range_table, print_report,
};
use crate::store::{EntryStore, JsonFileStorage, Storage};
use crate::transfer::{
    backup_file_name, csv_file_name, parse_backup, to_backup_json, to_csv, to_tsv,
};
use crate::utils::{parse_date, parse_purchases, parse_spend};

/// Everything a command handler needs besides the store
pub(crate) struct CommandContext<'a> {
    pub(crate) cli: &'a Cli,
    pub(crate) today: NaiveDate,
    pub(crate) selection: ProjectSelection,
    pub(crate) filter: DateFilterState,
    pub(crate) view: ViewOptions,
}

impl<'a> CommandContext<'a> {
    pub(crate) fn new(cli: &'a Cli, command: &Commands) -> Result<Self, AppError> {
        let today = match cli.today.as_deref() {
            Some(s) => parse_date(s)?,
            None => Local::now().date_naive(),
        };
        let view = ViewOptions {
            order: cli.order,
            use_color: cli.use_color(),
            lang: cli.lang(),
            number_format: NumberFormat::from_locale(cli.locale.as_deref())?,
        };
        let fallback = if command.defaults_to_all_dates() {
            RangeOption::All
        } else {
            cli.default_range.unwrap_or_default()
        };
        Ok(Self {
            cli,
            today,
            selection: cli.project.into(),
            filter: resolve_filter(cli, fallback)?,
            view,
        })
    }

    /// Project stage then date stage over the current snapshot
    fn selected(&self, entries: &[DailyEntry]) -> Vec<DailyEntry> {
        select(entries, self.selection, &self.filter, self.today)
    }
}

/// `--from`/`--to` make a custom range; otherwise `--range`, then `fallback`
fn resolve_filter(cli: &Cli, fallback: RangeOption) -> Result<DateFilterState, AppError> {
    if cli.from.is_none() && cli.to.is_none() {
        return Ok(DateFilterState::new(cli.range.unwrap_or(fallback)));
    }
    let day = |s: &Option<String>| -> Result<Option<String>, AppError> {
        s.as_deref().map(|s| parse_date(s).map(day_string)).transpose()
    };
    Ok(DateFilterState::custom(day(&cli.from)?, day(&cli.to)?))
}

/// Ask on stderr and read a y/N answer; `--yes` skips the question
fn confirm(prompt: &str, assume_yes: bool) -> Result<(), AppError> {
    if assume_yes {
        return Ok(());
    }
    eprint!("{prompt} [y/N] ");
    let _ = io::stderr().flush();
    let mut answer = String::new();
    io::stdin()
        .read_line(&mut answer)
        .map_err(|source| AppError::Read {
            path: PathBuf::from("<stdin>"),
            source,
        })?;
    match answer.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => Ok(()),
        _ => Err(AppError::Cancelled),
    }
}

fn describe_entry(entry: &DailyEntry, ctx: &CommandContext<'_>) -> String {
    format!(
        "{} · {} · {} · SAR {} · {} purchases",
        entry.date,
        project_label(entry.project, ctx.view.lang),
        platform_label(entry.platform, ctx.view.lang),
        entry.spend,
        entry.purchases
    )
}

fn print_entry_result<S: Storage>(
    action: &str,
    entry: &DailyEntry,
    store: &EntryStore<S>,
    ctx: &CommandContext<'_>,
) -> Result<(), AppError> {
    if ctx.cli.json {
        println!("{}", serde_json::to_string_pretty(entry)?);
    } else {
        println!("{action} entry {}", entry.id);
        println!("  {}", describe_entry(entry, ctx));
        tracing::debug!(location = %store.location(), "entries written");
    }
    Ok(())
}

fn handle_add<S: Storage>(
    store: &mut EntryStore<S>,
    ctx: &CommandContext<'_>,
    project: Project,
    platform: Platform,
    spend: &str,
    purchases: &str,
    date: Option<&str>,
) -> Result<(), AppError> {
    let date = match date {
        Some(d) => parse_date(d)?,
        None => ctx.today,
    };
    let entry = store.append(NewEntry {
        date: day_string(date),
        project,
        platform,
        spend: parse_spend(spend)?,
        purchases: parse_purchases(purchases)?,
    })?;
    print_entry_result("Added", &entry, store, ctx)
}

struct EntryChanges<'a> {
    date: Option<&'a str>,
    project: Option<Project>,
    platform: Option<Platform>,
    spend: Option<&'a str>,
    purchases: Option<&'a str>,
}

fn handle_update<S: Storage>(
    store: &mut EntryStore<S>,
    ctx: &CommandContext<'_>,
    id: &str,
    changes: EntryChanges<'_>,
) -> Result<(), AppError> {
    let mut entry = store.find(id)?.clone();
    if let Some(date) = changes.date {
        entry.date = day_string(parse_date(date)?);
    }
    if let Some(project) = changes.project {
        entry.project = project;
    }
    if let Some(platform) = changes.platform {
        entry.platform = platform;
    }
    if let Some(spend) = changes.spend {
        entry.spend = parse_spend(spend)?;
    }
    if let Some(purchases) = changes.purchases {
        entry.purchases = parse_purchases(purchases)?;
    }
    store.update(entry.clone())?;
    print_entry_result("Updated", &entry, store, ctx)
}

fn handle_delete<S: Storage>(
    store: &mut EntryStore<S>,
    ctx: &CommandContext<'_>,
    id: &str,
) -> Result<(), AppError> {
    let entry = store.find(id)?;
    confirm(
        &format!("Delete {}?", describe_entry(entry, ctx)),
        ctx.cli.yes,
    )?;
    let id = entry.id.clone();
    let removed = store.remove(&id)?;
    print_entry_result("Deleted", &removed, store, ctx)
}

fn handle_list<S: Storage>(store: &EntryStore<S>, ctx: &CommandContext<'_>) {
    let entries = ctx.selected(store.snapshot());
    if ctx.cli.json {
        println!("{}", output_entry_json(&entries, ctx.view.order));
    } else if entries.is_empty() {
        println!("No entries found.");
    } else {
        print_entry_list(&entries, &ctx.view);
    }
}

fn handle_report<S: Storage>(store: &EntryStore<S>, ctx: &CommandContext<'_>) {
    let entries = store.snapshot();
    let overview_filter = DateFilterState::new(ctx.cli.overview_range.unwrap_or_default());
    let report = Report {
        today: ctx.today,
        overview: overview(entries, ctx.selection, &overview_filter, ctx.today)
            .map(|stats| (overview_filter, stats)),
        sections: ctx
            .selection
            .projects()
            .into_iter()
            .map(|project| project_view(entries, project, &ctx.filter, ctx.today))
            .collect(),
        filter: ctx.filter.clone(),
    };
    if ctx.cli.json {
        println!("{}", output_report_json(&report));
    } else {
        print_report(&report, &ctx.view);
    }
}

fn handle_platforms<S: Storage>(store: &EntryStore<S>, ctx: &CommandContext<'_>) {
    let rows = platform_breakdown(&ctx.selected(store.snapshot()));
    if ctx.cli.json {
        println!("{}", output_platform_json(&rows));
    } else {
        print_platform_table(&rows, &ctx.view);
    }
}

fn handle_daily<S: Storage>(store: &EntryStore<S>, ctx: &CommandContext<'_>) {
    let days = daily_series(&ctx.selected(store.snapshot()));
    if ctx.cli.json {
        println!("{}", output_daily_json(&days, ctx.view.order));
    } else if days.is_empty() {
        println!("No entries in this range.");
    } else {
        print_daily_table(&days, &ctx.view);
    }
}

fn write_export(path: &Path, content: &str) -> Result<(), AppError> {
    fs::write(path, content).map_err(|source| AppError::Write {
        path: path.to_path_buf(),
        source,
    })
}

fn handle_export<S: Storage>(
    store: &EntryStore<S>,
    ctx: &CommandContext<'_>,
    format: ExportFormat,
    out: Option<&Path>,
) -> Result<(), AppError> {
    let entries = ctx.selected(store.snapshot());
    let content = match format {
        ExportFormat::Csv => to_csv(&entries, ctx.view.lang)?,
        ExportFormat::Tsv => to_tsv(&entries, ctx.view.lang)?,
        ExportFormat::Json => to_backup_json(&entries)?,
    };

    let target = match (out, format) {
        (Some(path), _) if path == Path::new("-") => None,
        (Some(path), _) => Some(path.to_path_buf()),
        (None, ExportFormat::Csv) => Some(PathBuf::from(csv_file_name(ctx.today))),
        (None, ExportFormat::Json) => Some(PathBuf::from(backup_file_name(ctx.today))),
        (None, ExportFormat::Tsv) => None,
    };
    match target {
        Some(path) => {
            write_export(&path, &content)?;
            println!("Exported {} entries to {}", entries.len(), path.display());
        }
        None => println!("{content}"),
    }
    Ok(())
}

fn handle_import<S: Storage>(
    store: &mut EntryStore<S>,
    ctx: &CommandContext<'_>,
    file: &Path,
) -> Result<(), AppError> {
    let text = fs::read_to_string(file).map_err(|source| AppError::Read {
        path: file.to_path_buf(),
        source,
    })?;
    let entries = parse_backup(&text)?;
    confirm(
        &format!(
            "Replace all {} entries with {} entries from {}?",
            store.snapshot().len(),
            entries.len(),
            file.display()
        ),
        ctx.cli.yes,
    )?;
    let count = entries.len();
    store.replace(entries)?;
    println!("Imported {count} entries into {}", store.location());
    Ok(())
}

fn handle_save<S: Storage>(store: &mut EntryStore<S>) -> Result<(), AppError> {
    store.persist()?;
    println!(
        "Saved {} entries to {}",
        store.snapshot().len(),
        store.location()
    );
    Ok(())
}

fn handle_ranges(ctx: &CommandContext<'_>) {
    if ctx.cli.json {
        println!("{}", output_range_json(ctx.today));
    } else {
        print_range_table(ctx.today, &ctx.view);
    }
}

/// Run the parsed command line against the entries file
pub(crate) fn run(cli: &Cli) -> Result<(), AppError> {
    let default_command = Commands::Report;
    let command = cli.command.as_ref().unwrap_or(&default_command);
    let ctx = CommandContext::new(cli, command)?;

    let path = cli
        .data_file
        .clone()
        .unwrap_or_else(JsonFileStorage::default_path);
    let mut store = EntryStore::open(JsonFileStorage::new(path));

    match command {
        Commands::Add {
            entry_project,
            platform,
            spend,
            purchases,
            date,
        } => handle_add(
            &mut store,
            &ctx,
            *entry_project,
            *platform,
            spend,
            purchases,
            date.as_deref(),
        )?,
        Commands::Update {
            id,
            date,
            set_project,
            platform,
            spend,
            purchases,
        } => handle_update(
            &mut store,
            &ctx,
            id,
            EntryChanges {
                date: date.as_deref(),
                project: *set_project,
                platform: *platform,
                spend: spend.as_deref(),
                purchases: purchases.as_deref(),
            },
        )?,
        Commands::Delete { id } => handle_delete(&mut store, &ctx, id)?,
        Commands::List => handle_list(&store, &ctx),
        Commands::Report => handle_report(&store, &ctx),
        Commands::Platforms => handle_platforms(&store, &ctx),
        Commands::Daily => handle_daily(&store, &ctx),
        Commands::Export { format, out } => handle_export(&store, &ctx, *format, out.as_deref())?,
        Commands::Import { file } => handle_import(&mut store, &ctx, file)?,
        Commands::Save => handle_save(&mut store)?,
        Commands::Ranges => handle_ranges(&ctx),
    }

    tracing::debug!(version = store.version(), "done");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("adspend").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn from_and_to_make_a_custom_range() {
        let cli = cli(&["--from", "20240301", "--to", "2024-03-05", "-r", "today"]);
        let filter = resolve_filter(&cli, RangeOption::Today).unwrap();
        assert_eq!(filter.option, RangeOption::Custom);
        assert_eq!(filter.custom_start.as_deref(), Some("2024-03-01"));
        assert_eq!(filter.custom_end.as_deref(), Some("2024-03-05"));
    }

    #[test]
    fn range_flag_beats_fallback() {
        let cli = cli(&["-r", "this-month"]);
        let filter = resolve_filter(&cli, RangeOption::All).unwrap();
        assert_eq!(filter, DateFilterState::new(RangeOption::ThisMonth));
    }

    #[test]
    fn bad_from_date_is_an_error() {
        let cli = cli(&["--from", "March"]);
        assert!(matches!(
            resolve_filter(&cli, RangeOption::Today),
            Err(AppError::InvalidDate { .. })
        ));
    }

    #[test]
    fn list_defaults_to_all_dates_and_report_to_today() {
        let list = cli(&["list", "--today", "2024-03-15"]);
        let command = list.command.as_ref().unwrap();
        let ctx = CommandContext::new(&list, command).unwrap();
        assert_eq!(ctx.filter.option, RangeOption::All);

        let report = cli(&["report", "--today", "2024-03-15", "-p", "maraya"]);
        let command = report.command.as_ref().unwrap();
        let ctx = CommandContext::new(&report, command).unwrap();
        assert_eq!(ctx.filter.option, RangeOption::Today);
        assert_eq!(ctx.selection, ProjectSelection::One(Project::Maraya));
        assert_eq!(ctx.today, NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
    }

    #[test]
    fn confirm_with_yes_skips_prompt() {
        assert!(confirm("Delete?", true).is_ok());
    }
}
