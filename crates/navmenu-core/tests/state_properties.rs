//! Exhaustive checks of the menu controller over every short toggle sequence

use navmenu_core::{MenuController, MenuSide, OpenState};

const MAX_LEN: u32 = 6;

/// Every sequence of sides up to `MAX_LEN` long (3^6 = 729 at the top)
fn sequences() -> Vec<Vec<MenuSide>> {
    let sides = MenuSide::all();
    let mut out = vec![Vec::new()];
    for len in 1..=MAX_LEN {
        for n in 0..3usize.pow(len) {
            let mut seq = Vec::with_capacity(len as usize);
            let mut rest = n;
            for _ in 0..len {
                seq.push(sides[rest % 3]);
                rest /= 3;
            }
            out.push(seq);
        }
    }
    out
}

fn open_count(menus: &MenuController) -> usize {
    MenuSide::all().iter().filter(|s| menus.is_open(**s)).count()
}

#[test]
fn test_at_most_one_open_after_every_toggle() {
    for seq in sequences() {
        let mut menus = MenuController::new();
        for side in &seq {
            let state = menus.toggle(*side);
            assert!(open_count(&menus) <= 1, "sequence {:?}", seq);
            // The toggled side is either the open one or everything is closed
            assert!(state == OpenState::open(*side) || state == OpenState::CLOSED);
        }
    }
}

#[test]
fn test_double_toggle_closes_that_side() {
    for seq in sequences() {
        let mut menus = MenuController::new();
        for side in &seq {
            menus.toggle(*side);
        }
        for side in MenuSide::all() {
            let mut probe = menus;
            let was_open = probe.is_open(*side);
            probe.toggle(*side);
            probe.toggle(*side);
            if was_open {
                // close, then open again
                assert_eq!(probe.state(), OpenState::open(*side));
            } else {
                assert_eq!(probe.state(), OpenState::CLOSED, "sequence {:?}", seq);
            }
        }
    }
}

#[test]
fn test_close_all_from_any_state() {
    for seq in sequences() {
        let mut menus = MenuController::new();
        for side in &seq {
            menus.toggle(*side);
        }
        menus.close_all();
        assert_eq!(menus.state(), OpenState::CLOSED);
        menus.close_all();
        assert_eq!(menus.state(), OpenState::CLOSED);
    }
}
