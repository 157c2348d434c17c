use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;
use webapi_checker::config::ProbeConfig;
use webapi_checker::probe::{probe_features, probe_permissions};
use webapi_checker::report::Report;
use webapi_checker::status::{FeatureFlag, PermissionOutcome};

use crate::ui_model::{
    permission_rows, permissions_footer, FeatureRow, FEATURE_COLUMNS, PERMISSIONS_CAPTION,
    PERMISSIONS_CAPTION_CODE, PERMISSION_COLUMNS,
};

mod config;
mod host;

use host::BrowserHost;

pub fn start() {
    console_error_panic_hook::set_once();

    let loaded = config::load_config();
    let config = loaded.clone().unwrap_or_default();
    let level = config.try_max_level();
    tracing_wasm::set_as_global_default_with_config(
        tracing_wasm::WASMLayerConfigBuilder::new()
            .set_max_level(level.clone().unwrap_or(tracing::Level::INFO))
            .build(),
    );
    for e in [loaded.err(), level.err()].into_iter().flatten() {
        tracing::warn!("{}", e);
    }
    tracing::info!(timeout_ms = ?config.query_timeout_ms, "web-api-checker starting");

    mount_to_body(move || view! { <App config=config.clone() /> });
}

#[component]
fn App(config: ProbeConfig) -> impl IntoView {
    // Presence tests run once per view; the rows and the logged report share them.
    let flags = probe_features(&BrowserHost);

    view! {
        <main class="container">
            <table>
                <thead>
                    <tr>
                        {FEATURE_COLUMNS
                            .iter()
                            .map(|c| view! { <th scope="col">{*c}</th> })
                            .collect_view()}
                    </tr>
                </thead>
                <tbody>
                    {flags
                        .iter()
                        .cloned()
                        .map(|flag| view! { <FeatureProbeRow flag=flag /> })
                        .collect_view()}
                </tbody>
            </table>
            <p>{PERMISSIONS_CAPTION}<code>{PERMISSIONS_CAPTION_CODE}</code></p>
            <PermissionsTable config=config flags=flags.clone() />
        </main>
    }
}

#[component]
fn FeatureProbeRow(flag: FeatureFlag) -> impl IntoView {
    let row = FeatureRow::from(&flag);

    view! {
        <tr>
            <th scope="row">{row.rank}</th>
            <td><mark>{row.state}</mark></td>
            <td>{row.name}</td>
            <td>
                <code>{row.code}</code>
            </td>
        </tr>
    }
}

/// Issues every permission query on mount and renders the table once all of
/// them have settled.
#[component]
fn PermissionsTable(config: ProbeConfig, flags: Vec<FeatureFlag>) -> impl IntoView {
    let (outcomes, set_outcomes) = signal(Vec::<PermissionOutcome>::new());

    spawn_local(async move {
        let settled = probe_permissions(&BrowserHost, &config).await;

        let report = Report::new(flags, settled);
        tracing::info!(
            features_present = report.features_present(),
            "{}",
            report.summary().describe()
        );
        match report.to_json() {
            Ok(json) => tracing::debug!(report = %json, "checks settled"),
            Err(e) => tracing::warn!("Failed to serialize report: {}", e),
        }

        set_outcomes.set(report.permissions);
    });

    view! {
        <section>
            <table>
                <thead>
                    <tr>
                        {PERMISSION_COLUMNS
                            .iter()
                            .map(|c| view! { <th>{*c}</th> })
                            .collect_view()}
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || permission_rows(&outcomes.get())
                        key=|row| row.index
                        children=|row| {
                            view! {
                                <tr>
                                    <td>{row.index}</td>
                                    <td>
                                        <mark class=row.class>{row.state}</mark>
                                    </td>
                                    <td>{row.name}</td>
                                    <td>{row.error}</td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
            <p class="summary">{move || permissions_footer(&outcomes.get())}</p>
        </section>
    }
}
