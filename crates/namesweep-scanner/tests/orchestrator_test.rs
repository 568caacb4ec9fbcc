//! End-to-end orchestrator tests with a scripted prober.

use async_trait::async_trait;
use namesweep_catalog::{Catalog, PlatformDescriptor};
use namesweep_core::{FoundAccount, PlatformName, Username};
use namesweep_scanner::{
    build_profile_url, events::NullSink, ProbeOutcome, Prober, ScanEvent, ScanOrchestrator,
    ScanStatus,
};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug, Clone, Copy)]
enum Scripted {
    Found,
    Absent,
    Failed,
    Hang,
}

/// Prober that replays scripted outcomes instead of touching the network.
struct ScriptedProber {
    outcomes: HashMap<String, Scripted>,
}

impl ScriptedProber {
    fn new(outcomes: &[(&str, Scripted)]) -> Self {
        Self {
            outcomes: outcomes
                .iter()
                .map(|(name, outcome)| ((*name).to_string(), *outcome))
                .collect(),
        }
    }
}

#[async_trait]
impl Prober for ScriptedProber {
    async fn probe(&self, descriptor: &PlatformDescriptor, username: &Username) -> ProbeOutcome {
        match self
            .outcomes
            .get(descriptor.name.as_str())
            .copied()
            .unwrap_or(Scripted::Absent)
        {
            Scripted::Found => ProbeOutcome::Found(FoundAccount {
                name: descriptor.name.clone(),
                url: build_profile_url(&descriptor.url_template, username),
            }),
            Scripted::Absent => ProbeOutcome::Absent,
            Scripted::Failed => ProbeOutcome::Failed("connection reset by peer".to_string()),
            Scripted::Hang => {
                std::future::pending::<()>().await;
                unreachable!()
            }
        }
    }
}

fn username(s: &str) -> Username {
    Username::new(s).expect("valid username")
}

fn platform(s: &str) -> PlatformName {
    PlatformName::new(s).expect("valid platform name")
}

fn catalog(entries: &[(&str, &str)]) -> Catalog {
    entries
        .iter()
        .map(|(name, template)| PlatformDescriptor::new(platform(name), *template))
        .collect()
}

fn orchestrator(prober: ScriptedProber) -> ScanOrchestrator {
    ScanOrchestrator::new(Arc::new(prober)).with_probe_delay(Duration::from_millis(1))
}

#[tokio::test]
async fn test_github_reddit_scenario() {
    let catalog = catalog(&[
        ("github", "https://github.com/{}"),
        ("reddit", "https://reddit.com/u/{}"),
    ]);
    let orchestrator = orchestrator(ScriptedProber::new(&[
        ("github", Scripted::Found),
        ("reddit", Scripted::Absent),
    ]));

    let mut events = Vec::new();
    let mut sink = |event: ScanEvent| events.push(event);
    let session = orchestrator
        .run_scan(username("alice"), &catalog, &mut sink)
        .await;

    assert_eq!(session.status, ScanStatus::Completed);
    assert_eq!(session.scanned_count, 2);
    assert_eq!(session.found_count, 1);
    assert_eq!(
        session.results,
        vec![FoundAccount {
            name: platform("github"),
            url: "https://github.com/alice".to_string(),
        }]
    );

    let expected = vec![
        ScanEvent::Checking {
            platform_name: platform("github"),
        },
        ScanEvent::ResultsUpdated {
            results: session.results.clone(),
            reveal_all: false,
        },
        ScanEvent::Counters {
            scanned_count: 1,
            found_count: 1,
            total_platforms: 2,
        },
        ScanEvent::Checking {
            platform_name: platform("reddit"),
        },
        ScanEvent::Counters {
            scanned_count: 2,
            found_count: 1,
            total_platforms: 2,
        },
        ScanEvent::Done,
    ];
    assert_eq!(events, expected);
}

#[tokio::test]
async fn test_empty_catalog_completes_immediately() {
    let orchestrator = orchestrator(ScriptedProber::new(&[]));

    let mut events = Vec::new();
    let mut sink = |event: ScanEvent| events.push(event);
    let session = orchestrator
        .run_scan(username("alice"), &Catalog::new(), &mut sink)
        .await;

    assert!(session.is_complete());
    assert_eq!(session.total_platforms, 0);
    assert_eq!(session.scanned_count, 0);
    assert_eq!(session.found_count, 0);
    assert!(session.results.is_empty());
    assert_eq!(events, vec![ScanEvent::Done]);
}

#[tokio::test]
async fn test_results_are_subsequence_of_catalog_order() {
    let catalog = catalog(&[
        ("zulip", "https://z.example/{}"),
        ("apple", "https://a.example/{}"),
        ("medium", "https://m.example/{}"),
        ("quora", "https://q.example/{}"),
        ("behance", "https://b.example/{}"),
    ]);
    let orchestrator = orchestrator(ScriptedProber::new(&[
        ("zulip", Scripted::Found),
        ("apple", Scripted::Absent),
        ("medium", Scripted::Found),
        ("quora", Scripted::Failed),
        ("behance", Scripted::Found),
    ]));

    let session = orchestrator
        .run_scan(username("alice"), &catalog, &mut NullSink)
        .await;

    // Probe failures never abort the scan
    assert_eq!(session.scanned_count, 5);
    assert_eq!(session.found_count, 3);

    let found_order: Vec<&str> = session.results.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(found_order, vec!["zulip", "medium", "behance"]);
}

#[tokio::test]
async fn test_failures_collapse_into_absent() {
    let catalog = catalog(&[
        ("one", "https://one.example/{}"),
        ("two", "https://two.example/{}"),
    ]);
    let orchestrator = orchestrator(ScriptedProber::new(&[
        ("one", Scripted::Failed),
        ("two", Scripted::Failed),
    ]));

    let session = orchestrator
        .run_scan(username("alice"), &catalog, &mut NullSink)
        .await;

    // Worst case of any failure: an empty result set with a completed scan
    assert!(session.is_complete());
    assert_eq!(session.scanned_count, 2);
    assert_eq!(session.found_count, 0);
    assert!(session.results.is_empty());
}

#[tokio::test]
async fn test_new_scan_supersedes_in_flight_scan() {
    let orchestrator = Arc::new(orchestrator(ScriptedProber::new(&[(
        "github",
        Scripted::Hang,
    )])));
    let hanging_catalog = catalog(&[("github", "https://github.com/{}")]);

    let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
    let first_orchestrator = orchestrator.clone();
    let first = tokio::spawn(async move {
        let mut sink = move |event: ScanEvent| {
            let _ = tx.send(event);
        };
        first_orchestrator
            .run_scan(username("alice"), &hanging_catalog, &mut sink)
            .await
    });

    // Let the first scan reach its hanging probe before superseding it
    tokio::time::sleep(Duration::from_millis(50)).await;

    let second = orchestrator
        .run_scan(username("bob"), &Catalog::new(), &mut NullSink)
        .await;
    assert!(second.is_complete());

    let first = first.await.expect("join first scan");
    assert_eq!(first.status, ScanStatus::Cancelled);
    assert_eq!(first.scanned_count, 0);
    assert!(first.results.is_empty());

    // The superseded scan emitted only its initial checking event, never Done
    let mut events = Vec::new();
    while let Ok(event) = rx.try_recv() {
        events.push(event);
    }
    assert_eq!(
        events,
        vec![ScanEvent::Checking {
            platform_name: platform("github"),
        }]
    );
}
