//! webhook-certgen CLI.
//!
//! This binary generates a bootstrap certificate bundle and writes it out
//! using the Kubernetes TLS secret file names: `ca.crt`, `tls.crt` and
//! `tls.key`.

use clap::Parser;
use std::fs;
use std::path::PathBuf;
use webhook_certgen::error::Result;
use webhook_certgen::generate_certificate_bundle;

#[derive(Parser)]
#[command(name = "webhook-certgen")]
#[command(about = "Generate a self-signed CA and webhook serving certificate", long_about = None)]
struct Cli {
    /// Subject organization (repeatable)
    #[arg(long = "org")]
    organizations: Vec<String>,

    /// DNS subject alternative name for the serving certificate (repeatable)
    #[arg(long = "dns")]
    dns_names: Vec<String>,

    /// Common name, typically the webhook Service DNS name
    #[arg(long)]
    common_name: String,

    /// Output directory (default: current directory)
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let bundle =
        generate_certificate_bundle(&cli.organizations, &cli.dns_names, &cli.common_name)?;

    fs::create_dir_all(&cli.out_dir)?;

    let ca_path = cli.out_dir.join("ca.crt");
    let cert_path = cli.out_dir.join("tls.crt");
    let key_path = cli.out_dir.join("tls.key");

    fs::write(&ca_path, &bundle.ca_cert_pem)?;
    fs::write(&cert_path, &bundle.cert_pem)?;
    fs::write(&key_path, &bundle.key_pem)?;

    println!("✓ Wrote CA certificate: {}", ca_path.display());
    println!("✓ Wrote serving certificate: {}", cert_path.display());
    println!("✓ Wrote private key: {}", key_path.display());
    println!("  Common name: {}", cli.common_name);
    if !cli.dns_names.is_empty() {
        println!("  DNS names: {}", cli.dns_names.join(", "));
    }

    Ok(())
}
