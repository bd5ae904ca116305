//! End-to-end session tests over the built-in content.

use warren_content::{cave_wisp, giant_rat, player, rubble};
use warren_core::{
    CollisionPolicy, EntityId, GameEvent, GridVec, MoveAction, UseItemAction, WaitAction,
};
use warren_runtime::{Session, SessionError};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[test]
fn a_short_crawl_through_the_warren() {
    init_tracing();
    let mut session = Session::with_builtin_items();

    let hero = session.spawn(&player(), GridVec::new(0, 0)).unwrap();
    let rat = session.spawn(&giant_rat(), GridVec::new(2, 0)).unwrap();
    let wisp = session.spawn(&cave_wisp(), GridVec::new(0, 1)).unwrap();

    // Walking east lands next to the rat.
    session.push_command(MoveAction::by(hero, GridVec::new(1, 0)));
    let report = session.step();
    assert!(report.gameplay_update);
    assert!(report.events.contains(&GameEvent::Moved {
        pawn: hero,
        from: GridVec::new(0, 0),
        to: GridVec::new(1, 0),
    }));

    // The rat blocks; the hero stays put.
    session.push_command(MoveAction::by(hero, GridVec::new(1, 0)));
    let report = session.step();
    assert!(report.errors.is_empty());
    assert_eq!(
        session.state().entities.pawn(hero).unwrap().position,
        GridVec::new(1, 0)
    );

    // Stepping onto the wisp overlaps and relocates.
    session.push_command(MoveAction::to(hero, GridVec::new(0, 1)));
    let report = session.step();
    let overlaps: Vec<_> = report
        .events
        .iter()
        .filter(|e| matches!(e, GameEvent::Overlapped { .. }))
        .collect();
    assert_eq!(overlaps.len(), 1);
    assert_eq!(
        overlaps[0],
        &GameEvent::Overlapped {
            occupant: wisp,
            mover: hero,
        }
    );
    assert_eq!(
        session.state().entities.pawn(hero).unwrap().position,
        GridVec::new(0, 1)
    );

    // The rat never moved and is still registered.
    assert_eq!(
        session.state().entities.pawn(rat).unwrap().position,
        GridVec::new(2, 0)
    );
}

#[test]
fn granting_and_drinking_a_potion() {
    init_tracing();
    let mut session = Session::with_builtin_items();
    let hero = session.spawn(&player(), GridVec::new(0, 0)).unwrap();
    session.state_mut().entities.pawn_mut(hero).unwrap().stats.health = 10;

    let outcome = session.grant_item(hero, "healing_potion", 2, false).unwrap();
    assert!(outcome.fully_added());

    session.push_command(UseItemAction::new(hero, 0));
    let report = session.step();

    assert!(report.errors.is_empty());
    assert_eq!(
        session.state().entities.pawn(hero).unwrap().stats.health,
        14
    );
    assert!(report.events.contains(&GameEvent::ItemAdded {
        pawn: hero,
        display_name: "Healing Potion".into(),
        slot: 0,
    }));
}

#[test]
fn auto_equipping_a_granted_sword_hits_the_debug_sink() {
    init_tracing();
    let mut session = Session::with_builtin_items();
    let hero = session.spawn(&player(), GridVec::new(0, 0)).unwrap();

    session.grant_item(hero, "rusty_sword", 1, true).unwrap();
    let report = session.step();

    assert_eq!(
        session.state().entities.pawn(hero).unwrap().equipment.weapon,
        Some(0)
    );
    assert!(report
        .debug_messages
        .iter()
        .any(|m| m == "equipped item in weapon slot"));
}

#[test]
fn drinking_then_discarding_depletes_the_stack() {
    init_tracing();
    let mut session = Session::with_builtin_items();
    let hero = session.spawn(&player(), GridVec::new(0, 0)).unwrap();
    session.grant_item(hero, "ration", 3, false).unwrap();

    // Consuming applies effects only; the caller pairs it with removal.
    session.push_command(UseItemAction::new(hero, 0));
    session.step();
    let outcome = session.strip_item(hero, "ration", 1).unwrap();

    assert!(outcome.fully_removed());
    assert_eq!(
        session
            .state()
            .entities
            .pawn(hero)
            .unwrap()
            .inventory
            .quantity_of("ration"),
        2
    );
}

#[test]
fn unknown_definitions_and_stale_pawns_fail_cleanly() {
    init_tracing();
    let mut session = Session::with_builtin_items();
    let hero = session.spawn(&player(), GridVec::new(0, 0)).unwrap();

    assert_eq!(
        session.grant_item(hero, "ambrosia", 1, false),
        Err(SessionError::UnknownItem("ambrosia".into()))
    );
    assert_eq!(
        session.grant_item(EntityId(99), "ration", 1, false),
        Err(SessionError::PawnNotFound(EntityId(99)))
    );
}

#[test]
fn combat_death_is_swept_and_the_corpse_cell_freed() {
    init_tracing();
    let mut session = Session::with_builtin_items();
    let hero = session.spawn(&player(), GridVec::new(0, 0)).unwrap();
    let rat = session.spawn(&giant_rat(), GridVec::new(1, 0)).unwrap();

    let dealt = session.state_mut().deal_damage(rat, 10, hero).unwrap();
    assert_eq!(dealt, 10, "the rat has no defence");

    session.push_command(WaitAction::new(hero));
    let report = session.step();

    assert_eq!(report.swept, 1);
    assert!(report.events.contains(&GameEvent::Died {
        victim: rat,
        source: hero,
    }));
    assert!(session.state().entities.pawn(rat).is_none());

    // The freed cell can now be entered.
    session.push_command(MoveAction::by(hero, GridVec::new(1, 0)));
    session.step();
    assert_eq!(
        session.state().entities.pawn(hero).unwrap().position,
        GridVec::new(1, 0)
    );
}

#[test]
fn rubble_blocks_until_removed_from_the_registry() {
    init_tracing();
    let mut session = Session::with_builtin_items();
    let hero = session.spawn(&player(), GridVec::new(0, 0)).unwrap();
    let pile = session.spawn(&rubble(), GridVec::new(0, 1)).unwrap();
    assert_eq!(
        session.state().entities.pawn(pile).unwrap().collision,
        CollisionPolicy::Block
    );

    session.push_command(MoveAction::by(hero, GridVec::new(0, 1)));
    session.step();
    assert_eq!(
        session.state().entities.pawn(hero).unwrap().position,
        GridVec::new(0, 0)
    );
}
