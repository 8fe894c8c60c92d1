// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use gh_activity::{ActivityReport, RawEvent, RendererRegistry, ReportRenderer, parse_link_header};
use serde_json::json;

fn sample_page() -> Vec<RawEvent,>
{
    let kinds = [
        ("IssuesEvent", json!({"action": "opened", "issue": {"number": 5, "title": "Fix bug"}})),
        ("IssueCommentEvent", json!({"issue": {"number": 5}, "comment": {"body": "LGTM"}})),
        ("PullRequestEvent", json!({"action": "closed", "pull_request": {"number": 8, "title": "Docs"}})),
        ("GollumEvent", json!({"pages": [{"action": "edited", "title": "Home"}]})),
        ("PushEvent", json!({"size": 3})),
    ];

    (0..30)
        .map(|index| {
            let (kind, payload,) = &kinds[index % kinds.len()];
            serde_json::from_value(json!({
                "type": kind,
                "repo": {"name": format!("octo/repo-{}", index % 4)},
                "payload": payload,
            }),)
            .expect("valid event",)
        },)
        .collect()
}

fn benchmark_parse_link_header(c: &mut Criterion,)
{
    let header = r#"<https://api.github.com/user/583231/events?page=2>; rel="next", <https://api.github.com/user/583231/events?page=10>; rel="last""#;

    c.bench_function("parse_link_header", |b| b.iter(|| parse_link_header(black_box(header,),),),);
}

fn benchmark_ingest_page(c: &mut Criterion,)
{
    let registry = RendererRegistry::default();
    let events = sample_page();

    c.bench_function("ingest_page_30_events", |b| {
        b.iter(|| {
            let mut report = ActivityReport::new();
            report.ingest(&registry, black_box(&events,),);
            report
        },)
    },);
}

fn benchmark_render_report(c: &mut Criterion,)
{
    let registry = RendererRegistry::default();
    let mut report = ActivityReport::new();
    for _ in 0..10 {
        report.ingest(&registry, &sample_page(),);
    }
    let value = report.to_value().expect("serializable report",);
    let renderer = ReportRenderer::new(false,);

    c.bench_function("render_report_300_events", |b| {
        b.iter(|| renderer.render_to_string(black_box(&value,),).expect("render failed",),)
    },);
}

criterion_group!(benches, benchmark_parse_link_header, benchmark_ingest_page, benchmark_render_report);
criterion_main!(benches);
