//! The scripted walkthrough.
//!
//! Each step drives the simulated list the way a user would and records a
//! snapshot of the items and the undo popup afterwards.

use swipelist::{LayoutDirection, Result, SwipeListConfig, SwipeTargetId};
use swipelist_harness::{FRAME, ListKind, SimItem, Simulation};

use crate::cli::Cli;

/// Sub-view id of the swipeable content part of each row.
const CONTENT_PART: SwipeTargetId = SwipeTargetId(1);

/// List width in pixels.
const WIDTH: f32 = 320.0;

/// Far below every laid-out row.
const OUTSIDE_Y: f32 = 100_000.0;

/// State after one step of the walkthrough.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub step: &'static str,
    pub items: Vec<String>,
    pub popup: Option<(String, String)>,
}

pub fn run(cli: &Cli) -> Result<Vec<Snapshot>> {
    let config = cli.swipe_config()?;
    let hide_delay = config.undo_hide_delay;
    let mut sim = build(cli, config);
    sim.install_undoable_removal();
    sim.list_mut().enable_swipe()?;

    let width = WIDTH;
    let mut steps = vec![snapshot(&sim, "start")];

    sim.swipe(2, width * 0.6);
    sim.settle();
    steps.push(snapshot(&sim, "swipe item 2 towards the right"));

    sim.fling(0, -width * 0.3);
    sim.settle();
    steps.push(snapshot(&sim, "fling item 0 towards the left"));

    sim.list_mut().delete(1)?;
    sim.list_mut().delete(3)?;
    sim.settle();
    steps.push(snapshot(&sim, "delete items 1 and 3 together"));

    sim.click_undo();
    steps.push(snapshot(&sim, "click undo"));

    sim.press(width / 2.0, OUTSIDE_Y);
    sim.release(width / 2.0, OUTSIDE_Y);
    sim.advance(hide_delay + FRAME);
    steps.push(snapshot(&sim, "touch elsewhere and wait"));

    sim.list_mut().discard_all_pending();
    reset_items(&sim, cli.items);
    steps.push(snapshot(&sim, "reset items"));

    tracing::info!(
        message = "demo.done",
        steps = steps.len(),
        undone = sim.probe().undone_total(),
        discarded = sim.probe().discarded_total()
    );
    Ok(steps)
}

fn build(cli: &Cli, config: SwipeListConfig) -> Simulation {
    let kind = if cli.recycler {
        ListKind::Recycler
    } else {
        ListKind::List {
            headers: cli.headers,
        }
    };
    let layout = if cli.rtl {
        LayoutDirection::Rtl
    } else {
        LayoutDirection::Ltr
    };
    let config = if cli.swiping_layout {
        config.with_swipe_target(Some(CONTENT_PART))
    } else {
        config
    };
    let mut builder = Simulation::builder()
        .items(cli.items)
        .width(WIDTH)
        .kind(kind)
        .layout(layout)
        .config(config);
    if cli.swiping_layout {
        builder = builder.parts(CONTENT_PART);
    }
    builder.build()
}

fn reset_items(sim: &Simulation, count: usize) {
    let mut items = sim.host().items().borrow_mut();
    items.clear();
    items.extend((0..count as u64).map(|id| SimItem {
        id,
        label: format!("Item {id}"),
    }));
}

fn snapshot(sim: &Simulation, step: &'static str) -> Snapshot {
    let snapshot = Snapshot {
        step,
        items: sim.labels(),
        popup: sim.popup(),
    };
    tracing::debug!(
        message = "demo.step",
        step,
        items = snapshot.items.len(),
        popup = snapshot.popup.is_some()
    );
    snapshot
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    fn run_with(args: &[&str]) -> Vec<Snapshot> {
        let cli = Cli::try_parse_from(std::iter::once("swipelist-demo").chain(args.iter().copied()))
            .expect("valid arguments");
        run(&cli).expect("scenario runs")
    }

    fn items(step: &Snapshot) -> Vec<&str> {
        step.items.iter().map(String::as_str).collect()
    }

    #[test]
    fn single_popup_walkthrough() {
        let steps = run_with(&["--items", "6"]);
        assert_eq!(steps.len(), 7);
        assert_eq!(items(&steps[1]), ["Item 0", "Item 1", "Item 3", "Item 4", "Item 5"]);
        assert_eq!(items(&steps[2]), ["Item 1", "Item 3", "Item 4", "Item 5"]);
        // Item 5 at position 3 goes first, then Item 3 at position 1.
        assert_eq!(items(&steps[3]), ["Item 1", "Item 4"]);
        assert_eq!(
            steps[3].popup,
            Some(("Deleted Item 3".to_owned(), "Undo".to_owned()))
        );
        assert_eq!(items(&steps[4]), ["Item 1", "Item 3", "Item 4"]);
        assert_eq!(steps[4].popup, None);
        assert_eq!(steps[6].items.len(), 6);
    }

    #[test]
    fn collapsed_popup_restores_the_whole_batch() {
        let steps = run_with(&["--items", "6", "--style", "collapsed"]);
        assert_eq!(
            steps[3].popup,
            Some(("4 items deleted".to_owned(), "Undo all".to_owned()))
        );
        assert_eq!(steps[4].items.len(), 6);
        assert_eq!(steps[4].popup, None);
    }

    #[test]
    fn multilevel_popup_hides_after_touch_and_delay() {
        let steps = run_with(&["--items", "6", "--style", "multilevel"]);
        assert_eq!(
            steps[4].popup,
            Some(("3 items deleted".to_owned(), "Undo".to_owned()))
        );
        assert_eq!(steps[5].popup, None);
        assert_eq!(items(&steps[5]), items(&steps[4]));
    }

    #[test]
    fn end_only_keeps_flung_row() {
        let steps = run_with(&["--items", "6", "--direction", "end"]);
        assert_eq!(steps[2].items, steps[1].items);
    }

    #[test]
    fn swiping_layout_and_recycler_dismiss_too() {
        let steps = run_with(&["--items", "6", "--swiping-layout", "--recycler"]);
        assert_eq!(steps[1].items.len(), 5);
    }

    #[test]
    fn invalid_flags_are_reported() {
        let cli = Cli::try_parse_from(["swipelist-demo", "--hide-delay", "0"]).expect("parses");
        assert!(matches!(run(&cli), Err(swipelist::Error::Config(_))));
    }

    #[test]
    fn headers_conflict_with_recycler() {
        assert!(Cli::try_parse_from(["swipelist-demo", "--recycler", "--headers", "2"]).is_err());
    }
}
