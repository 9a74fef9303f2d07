use crate::cli::{Cli, Commands, FindArgs};
use crate::core::{FilterCriteria, TimeWindow};
use crate::error::AppError;
use crate::output::{
    format_optional_duration, output_project_json, output_record_json, print_project_table,
    print_record_table,
};
use crate::project::{ProjectMapping, build};
use crate::store::RecordStore;
use crate::utils::{DateNormalizer, NormalizedTimestamp, ReferenceClock, Zone};

pub(crate) fn run(cli: &Cli) -> Result<(), AppError> {
    let zone = Zone::parse(cli.timezone.as_deref())?;
    let normalizer = DateNormalizer::new(ReferenceClock::system(zone));

    match &cli.command {
        Commands::Find(args) => handle_find(cli, &normalizer, args),
        Commands::Projects => handle_projects(cli),
        Commands::Date { raw, end_of_day } => {
            handle_date(cli, &normalizer, &raw.join(" "), *end_of_day)
        }
        Commands::Duration { seconds } => {
            println!("{}", format_optional_duration(*seconds));
            Ok(())
        }
    }
}

fn handle_find(cli: &Cli, normalizer: &DateNormalizer, args: &FindArgs) -> Result<(), AppError> {
    let from = args
        .from
        .as_deref()
        .map(|raw| normalizer.normalize(raw))
        .transpose()?;
    let until = args
        .to
        .as_deref()
        .map(|raw| {
            normalizer
                .normalize(raw)
                .map(NormalizedTimestamp::end_of_day_if_midnight)
        })
        .transpose()?;

    let criteria = FilterCriteria::default()
        .with_window(TimeWindow::new(from, until))
        .with_projects(args.projects.iter().cloned())
        .with_tags(args.tags.iter().cloned());

    let store = RecordStore::new(cli.records_root(), cli.record_extension());
    let records = store.find(&criteria);

    if cli.json {
        println!("{}", output_record_json(&records));
    } else if records.is_empty() {
        println!("No task records found under {}.", store.root().display());
    } else {
        print_record_table(&records, cli.use_color());
    }
    Ok(())
}

fn handle_projects(cli: &Cli) -> Result<(), AppError> {
    let mapping = ProjectMapping::load(&ProjectMapping::default_path(&cli.home_dir()))?;
    let tree = build(&mapping);

    if cli.json {
        println!("{}", output_project_json(&tree));
    } else if mapping.is_empty() {
        println!("No projects configured.");
    } else {
        print_project_table(&tree, cli.use_color());
    }
    Ok(())
}

fn handle_date(
    cli: &Cli,
    normalizer: &DateNormalizer,
    raw: &str,
    end_of_day: bool,
) -> Result<(), AppError> {
    let mut timestamp = normalizer.normalize(raw)?;
    if end_of_day {
        timestamp = timestamp.end_of_day_if_midnight();
    }

    if cli.json {
        let json = serde_json::json!({
            "input": raw,
            "timestamp": timestamp.date_time().to_rfc3339(),
            "key": timestamp.comparison_key(),
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&json).unwrap_or_else(|_| json.to_string())
        );
    } else {
        println!("{timestamp}");
    }
    Ok(())
}
