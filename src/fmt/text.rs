use console::style;

use crate::domain::ntp::{ProbeOutcome, ServerTime};

/// Render one outcome: a reachable block with times, or a one-line failure.
pub fn render_outcome(outcome: &ProbeOutcome, verbose: bool) -> String {
    match outcome {
        ProbeOutcome::Success(time) => render_reachable(time, verbose),
        ProbeOutcome::Failure { server, reason } => format!(
            "{} {} {}",
            style(server).green().bold(),
            style("unreachable:").red().bold(),
            style(reason).red()
        ),
    }
}

fn render_reachable(time: &ServerTime, verbose: bool) -> String {
    let ip_version = if time.target.ip.is_ipv6() { "v6" } else { "v4" };

    let mut out = format!(
        "{srv_lbl} {srv_val}\n\
         {ip_lbl} {ip_val} ({ver})\n\
         {utc_lbl} {utc_val}\n\
         {loc_lbl} {loc_val}",
        srv_lbl = style("Server:").cyan().bold(),
        srv_val = style(&time.target.name).green(),
        ip_lbl = style("IP:").cyan().bold(),
        ip_val = style(time.target.ip).green(),
        ver = ip_version,
        utc_lbl = style("UTC Time:").cyan().bold(),
        utc_val = style(time.utc.to_rfc2822()).green(),
        loc_lbl = style("Local Time:").cyan().bold(),
        loc_val = style(time.local.format("%Y-%m-%d %H:%M:%S")).green(),
    );

    if verbose {
        out.push_str(&format!(
            "\n{port_lbl} {port_val}",
            port_lbl = style("Port:").cyan().bold(),
            port_val = time.target.port,
        ));
    }

    out
}

/// One-line reachable count over the whole run.
pub fn render_summary(outcomes: &[ProbeOutcome]) -> String {
    let reachable = outcomes.iter().filter(|o| o.is_success()).count();
    format!(
        "{} {}/{}",
        style("Reachable:").cyan().bold(),
        reachable,
        outcomes.len()
    )
}
