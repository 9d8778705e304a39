//! The scan orchestrator: choose a candidate, run both providers
//! independently, print verdicts, and leave an audit trail.

use crate::config::Config;
use crate::domain::models::{
    Candidate, OpenTipSummary, ScanReport, Verdict, VtReport,
};
use crate::providers::{opentip, virustotal};
use crate::services::audit::AuditLog;
use crate::services::catalog;
use crate::services::output::{print_json, Ui};
use reqwest::blocking::Client;
use sha2::{Digest, Sha256};
use std::path::Path;

const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const RESET: &str = "\x1b[0m";

pub fn run(json: bool, file: Option<&Path>, config: &Config) -> anyhow::Result<()> {
    let ui = Ui::new(json);
    let log = AuditLog::new(config.log_file.clone());

    let chosen = match file {
        Some(path) => {
            if !path.is_file() {
                anyhow::bail!("invalid filename: {}", path.display());
            }
            Candidate::from_path(path)?
        }
        None => {
            let candidates =
                catalog::list_candidates(&config.downloads_dir, &config.sanitized_dir)?;
            if candidates.is_empty() {
                ui.say("No PDFs found in downloads or sanitized.");
                return Ok(());
            }
            match catalog::choose(&candidates, &ui)? {
                Some(c) => c.clone(),
                None => {
                    ui.say("Cancelled.");
                    return Ok(());
                }
            }
        }
    };

    let sha256 = sha256_hex(&std::fs::read(&chosen.path)?);
    ui.say(format!("\nSelected: {}  (sha256 {})\n", chosen.name, sha256));
    log.write("scan", &format!("chosen {} sha256={}", chosen.name, sha256));

    let client = Client::builder().timeout(config.http_timeout).build()?;

    let vt = match &config.virustotal.api_key {
        None => {
            ui.say("No VirusTotal API key configured; skipping VirusTotal.");
            log.write("scan", "no VirusTotal API key, provider skipped");
            None
        }
        Some(key) => match run_virustotal(&client, config, key, &chosen, &ui, &log) {
            Ok(report) => Some(report),
            Err(e) => {
                ui.say(format!("Error (VirusTotal): {:#}", e));
                log.write("virustotal", &format!("error: {:#}", e));
                None
            }
        },
    };

    let kasp = match &config.opentip.api_key {
        None => {
            ui.say("No Kaspersky OpenTIP API key configured; skipping Kaspersky OpenTIP.");
            log.write("scan", "no OpenTIP API key, provider skipped");
            None
        }
        Some(key) => match run_opentip(&client, config, key, &chosen, &ui, &log) {
            Ok(report) => Some(report),
            Err(e) => {
                ui.say(format!("Error (Kaspersky OpenTIP): {:#}", e));
                log.write("opentip", &format!("error: {:#}", e));
                None
            }
        },
    };

    if let Some(report) = &vt {
        print_vt_block(&ui, report);
        log.write(
            "virustotal",
            &format!(
                "{} harmless={} malicious={} suspicious={} undetected={} verdict={}",
                chosen.name,
                report.stats.harmless,
                report.stats.malicious,
                report.stats.suspicious,
                report.stats.undetected,
                report.verdict
            ),
        );
    }
    if let Some(summary) = &kasp {
        print_opentip_block(&ui, summary);
        log.write(
            "opentip",
            &format!(
                "{} zone={} status={} verdict={}",
                chosen.name,
                summary.report.zone.as_deref().unwrap_or("<unknown>"),
                summary.report.status.as_deref().unwrap_or("<unknown>"),
                summary.verdict
            ),
        );
    }

    if json {
        print_json(ScanReport {
            file: chosen.name,
            sha256,
            virustotal: vt,
            opentip: kasp,
        })?;
    } else {
        println!("Results logged to {}", log.path().display());
    }
    Ok(())
}

fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}

fn run_virustotal(
    client: &Client,
    config: &Config,
    key: &str,
    chosen: &Candidate,
    ui: &Ui,
    log: &AuditLog,
) -> anyhow::Result<VtReport> {
    ui.say("Uploading to VirusTotal...");
    log.write("virustotal", &format!("uploading {}", chosen.name));
    let analysis_id = virustotal::upload(client, &config.virustotal, key, &chosen.path)?;
    ui.say(format!("Upload accepted, analysis id = {}", analysis_id));
    log.write("virustotal", &format!("analysis_id={}", analysis_id));

    ui.say("Polling VirusTotal (may take ~20-30 sec)...");
    let stats = virustotal::poll_analysis(
        client,
        &config.virustotal,
        key,
        &analysis_id,
        &config.poll,
        ui,
    )?;
    Ok(VtReport {
        verdict: virustotal::verdict_from_stats(&stats),
        stats,
    })
}

fn run_opentip(
    client: &Client,
    config: &Config,
    key: &str,
    chosen: &Candidate,
    ui: &Ui,
    log: &AuditLog,
) -> anyhow::Result<OpenTipSummary> {
    ui.say("Uploading to Kaspersky OpenTIP...");
    log.write("opentip", &format!("uploading {}", chosen.name));
    let mut report = opentip::upload(client, &config.opentip, key, &chosen.path)?;
    log.write(
        "opentip",
        &format!("scan response: {}", serde_json::to_string(&report)?),
    );

    if !opentip::is_complete(report.status.as_deref()) {
        let file_hash = opentip::preferred_hash(&report.info)
            .ok_or_else(|| anyhow::anyhow!("scan response carries no file hash to poll with"))?
            .to_string();
        ui.say(format!(
            "Scan still in progress (status '{}'), polling for completion...",
            report.status.as_deref().unwrap_or("<unknown>")
        ));
        report = opentip::poll_result(
            client,
            &config.opentip,
            key,
            &file_hash,
            &config.poll,
            ui,
        )?;
        log.write(
            "opentip",
            &format!("final response: {}", serde_json::to_string(&report)?),
        );
    }

    Ok(OpenTipSummary {
        verdict: opentip::report_verdict(&report),
        report,
    })
}

fn verdict_line(label: &str, verdict: Verdict) -> String {
    let color = if verdict.is_flagged() { RED } else { GREEN };
    format!("-> {} verdict: {}{}{}\n", label, color, verdict, RESET)
}

fn print_vt_block(ui: &Ui, report: &VtReport) {
    ui.say("\nVirusTotal results:");
    ui.say(format!("  harmless   : {}", report.stats.harmless));
    ui.say(format!("  malicious  : {}", report.stats.malicious));
    ui.say(format!("  suspicious : {}", report.stats.suspicious));
    ui.say(format!("  undetected : {}\n", report.stats.undetected));
    ui.say(verdict_line("VirusTotal", report.verdict));
}

fn print_opentip_block(ui: &Ui, summary: &OpenTipSummary) {
    let report = &summary.report;
    ui.say("Kaspersky OpenTIP results:");
    ui.say(format!(
        "  zone       : {}",
        report.zone.as_deref().unwrap_or("<unknown>")
    ));
    ui.say(format!(
        "  status     : {}",
        report.status.as_deref().unwrap_or("<unknown>")
    ));
    if let Some(md5) = &report.info.md5 {
        ui.say(format!("  md5        : {}", md5));
    }
    if let Some(sha1) = &report.info.sha1 {
        ui.say(format!("  sha1       : {}", sha1));
    }
    if let Some(sha256) = &report.info.sha256 {
        ui.say(format!("  sha256     : {}", sha256));
    }
    if let Some(size) = report.info.size {
        ui.say(format!("  size       : {}", size));
    }
    if let Some(file_type) = &report.info.file_type {
        ui.say(format!("  file type  : {}", file_type));
    }
    ui.say("");
    ui.say(verdict_line("Kaspersky OpenTIP", summary.verdict));
}
