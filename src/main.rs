use std::path::PathBuf;

use clap::{App, ArgMatches};
use clap::load_yaml;
use log::{error, info};

use fragment_include::{assemble, AssembleOptions, DynResult, FragmentSource};

#[tokio::main]
async fn main() -> DynResult<()> {
    log4rs::init_file("config/log4rs.yaml", Default::default())?;
    info!("Starting fragment_include");

    let yaml = load_yaml!("cli.yaml");
    let matches = App::from_yaml(yaml).get_matches();
    let options = options_from_args(&matches)?;
    info!("AssembleOptions: {:#?}", options);

    let assembled = match assemble(&options).await {
        Ok(assembled) => assembled,
        Err(error) => {
            error!("Could not assemble {:?}: {}", options.page, error);
            return Err(error);
        }
    };

    match &options.output {
        Some(path) => tokio::fs::write(path, &assembled.html).await?,
        None => println!("{}", assembled.html),
    }

    info!("Finished. {} loaded, {} failed, {} without container",
          assembled.report.loaded_count(), assembled.report.failed_count(), assembled.report.missing_count());
    Ok(())
}

fn options_from_args(matches: &ArgMatches) -> Result<AssembleOptions, &'static str> {
    let page = matches.value_of("page").ok_or("--page is required")?;
    let source = match (matches.value_of("base_url"), matches.value_of("sections_dir")) {
        (Some(base_url), None) => FragmentSource::Http { base_url: base_url.to_string() },
        (None, Some(path)) => FragmentSource::Directory { path: PathBuf::from(path) },
        _ => return Err("exactly one of --base-url and --sections-dir is required"),
    };

    Ok(AssembleOptions {
        page: PathBuf::from(page),
        source,
        config: matches.value_of("config").map(PathBuf::from),
        output: matches.value_of("output").map(PathBuf::from),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options_for(args: Vec<&str>) -> Result<AssembleOptions, String> {
        let yaml = load_yaml!("cli.yaml");
        let matches = App::from_yaml(yaml).get_matches_from_safe(args).map_err(|error| error.to_string())?;
        options_from_args(&matches).map_err(String::from)
    }

    #[test]
    fn base_url_selects_http_source() {
        let options = options_for(vec!["fragment_include", "--page", "index.html", "--base-url", "http://localhost:8080"]).unwrap();

        assert_eq!(options.page, PathBuf::from("index.html"));
        assert_eq!(options.source, FragmentSource::Http { base_url: "http://localhost:8080".into() });
        assert_eq!(options.output, None);
    }

    #[test]
    fn sections_dir_selects_directory_source() {
        let options = options_for(vec!["fragment_include", "--page", "index.html", "--sections-dir", "secciones", "-o", "out.html"]).unwrap();

        assert_eq!(options.source, FragmentSource::Directory { path: PathBuf::from("secciones") });
        assert_eq!(options.output, Some(PathBuf::from("out.html")));
    }

    #[test]
    fn a_fragment_source_is_required() {
        assert!(options_for(vec!["fragment_include", "--page", "index.html"]).is_err());
    }

    #[test]
    fn only_one_fragment_source_is_allowed() {
        assert!(options_for(vec!["fragment_include", "--page", "index.html", "--base-url", "http://localhost", "--sections-dir", "secciones"]).is_err());
    }
}
