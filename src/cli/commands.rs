use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "rssfinder")]
#[command(about = "Discover the RSS feeds exposed by the pages a web page links to")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Probe every same-domain link of a page and print the JSON report
    Discover {
        /// Page URL to start from
        url: String,

        /// Pretty-print the JSON report
        #[arg(long)]
        pretty: bool,
    },

    /// List the same-domain links of a page that would be probed
    Links {
        /// Page URL to start from
        url: String,
    },

    /// Serve discovery over HTTP or HTTPS (GET /?url=<page>)
    Serve {
        /// Address to bind (overrides RSSFINDER_BIND)
        #[arg(long)]
        bind: Option<String>,

        /// Port to listen on (overrides RSSFINDER_PORT)
        #[arg(short, long)]
        port: Option<u16>,

        /// PEM certificate chain; serves HTTPS (overrides RSSFINDER_TLS_CERT)
        #[arg(long, requires = "key")]
        cert: Option<PathBuf>,

        /// PEM private key (overrides RSSFINDER_TLS_KEY)
        #[arg(long, requires = "cert")]
        key: Option<PathBuf>,
    },
}
