// Integration tests for the trace engine and playback driver

use algotrace::catalog::Catalog;
use algotrace::config::PlaybackConfig;
use algotrace::driver::{Driver, PlaybackState};
use algotrace::input::{parse_graph, Input};
use algotrace::trace::graph::Graph;
use algotrace::trace::{Algorithm, GraphAction, SearchAction, SortAction, Step};

fn run(algorithm: Algorithm, input: &Input) -> Vec<Step> {
    algorithm.trace(input).expect("trace creation failed").collect()
}

#[test]
fn test_bubble_sort_scenario() {
    let input = Input::Sequence {
        values: vec![5, 3, 8, 1],
    };
    let steps = run(Algorithm::BubbleSort, &input);

    match (&steps[0], &steps[1]) {
        (Step::Sort(first), Step::Sort(second)) => {
            assert_eq!(first.kind, SortAction::Compare);
            assert_eq!(first.indices.as_slice(), &[0, 1]);
            assert_eq!(second.kind, SortAction::Swap);
            assert_eq!(second.indices.as_slice(), &[0, 1]);
            assert_eq!(second.snapshot, vec![3, 5, 8, 1]);
        }
        other => panic!("Expected sort steps, got {:?}", other),
    }
    match steps.last() {
        Some(Step::Sort(last)) => assert_eq!(last.snapshot, vec![1, 3, 5, 8]),
        other => panic!("Expected sort step, got {:?}", other),
    }
}

#[test]
fn test_binary_search_scenario() {
    let input = Input::Search {
        values: vec![1, 3, 5, 7, 9, 11],
        target: 7,
    };
    let steps = run(Algorithm::BinarySearch, &input);
    let descriptions: Vec<&str> = steps.iter().map(Step::description).collect();

    assert_eq!(
        descriptions,
        vec![
            "Checking middle index 2 (value: 5). Range: [0, 5]",
            "5 < 7, searching right half.",
            "Checking middle index 4 (value: 9). Range: [3, 5]",
            "9 > 7, searching left half.",
            "Checking middle index 3 (value: 7). Range: [3, 3]",
            "Found 7 at index 3!",
        ]
    );
    match steps.last() {
        Some(Step::Search(s)) => {
            assert_eq!(s.kind, SearchAction::Found);
            assert_eq!(s.indices.as_slice(), &[3]);
        }
        other => panic!("Expected search step, got {:?}", other),
    }
}

#[test]
fn test_bfs_scenario() {
    let input = Input::Graph {
        graph: parse_graph("1,2;0,3,4;0,5;1;1,5;2,4").expect("graph parse failed"),
        start: 0,
    };
    let visits: Vec<usize> = run(Algorithm::Bfs, &input)
        .iter()
        .filter_map(|step| match step {
            Step::Graph(g) if g.kind == GraphAction::Visit => Some(g.node),
            _ => None,
        })
        .collect();

    assert_eq!(visits, vec![0, 1, 2, 3, 4, 5]);
}

#[test]
fn test_linear_search_scenario() {
    let input = Input::Search {
        values: vec![10, 20, 5, 3],
        target: 99,
    };
    let kinds: Vec<&str> = run(Algorithm::LinearSearch, &input)
        .iter()
        .map(Step::kind_name)
        .collect();

    assert_eq!(
        kinds,
        vec!["compare", "compare", "compare", "compare", "not-found"]
    );
}

#[test]
fn test_reset_then_step_matches_fresh_driver() {
    let input = Input::Graph {
        graph: Graph::demo(),
        start: 2,
    };
    let mut fresh = Driver::new(Algorithm::Dfs, input.clone(), PlaybackConfig::default())
        .expect("driver creation failed");
    let mut used = Driver::new(Algorithm::Dfs, input, PlaybackConfig::default())
        .expect("driver creation failed");

    for _ in 0..5 {
        used.step().expect("step failed");
    }
    used.reset();

    assert_eq!(used.step().unwrap(), fresh.step().unwrap());
    assert_eq!(used.presentation(), fresh.presentation());
}

#[test]
fn test_driver_from_catalog_runs_every_algorithm() {
    let catalog = Catalog::builtin();
    for algorithm in Algorithm::ALL {
        let input = match algorithm.category() {
            algotrace::catalog::Category::Sorting => Input::Sequence {
                values: vec![4, 1, 3, 1, 2],
            },
            algotrace::catalog::Category::Searching => Input::Search {
                values: vec![1, 1, 2, 3, 4],
                target: 3,
            },
            _ => Input::Graph {
                graph: Graph::demo(),
                start: 0,
            },
        };
        let mut driver = Driver::from_catalog(
            &catalog,
            algorithm.slug(),
            input,
            PlaybackConfig::default(),
        )
        .expect("driver creation failed");

        while driver.step().expect("step failed").is_some() {}
        assert_eq!(driver.state(), PlaybackState::Done, "{:?}", algorithm);
    }
}

#[test]
fn test_unsupported_slug() {
    let catalog = Catalog::builtin();
    let result = Driver::from_catalog(
        &catalog,
        "heap-sort",
        Input::Sequence { values: vec![] },
        PlaybackConfig::default(),
    );
    assert!(result.is_err());
    assert_eq!(
        result.unwrap_err().to_string(),
        "unsupported algorithm: 'heap-sort'"
    );
}

#[test]
fn test_sort_presentation_ends_fully_sorted() {
    let mut driver = Driver::new(
        Algorithm::MergeSort,
        Input::Sequence {
            values: vec![6, 2, 9, 2, 7, 1],
        },
        PlaybackConfig::default(),
    )
    .expect("driver creation failed");

    while driver.step().unwrap().is_some() {}

    let view = driver.presentation();
    assert_eq!(view.array, vec![1, 2, 2, 6, 7, 9]);
    assert_eq!(view.sorted, vec![0, 1, 2, 3, 4, 5]);
    assert_eq!(view.description, "Sorted!");
}
