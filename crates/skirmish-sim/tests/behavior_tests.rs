//! Behavior-tree timing as seen through the world.

use skirmish_bhv::{BurstState, Node, Sample, Status, Tree, WaitState};
use skirmish_core::enums::EntityType;
use skirmish_sim::World;

fn marker_action() -> Node<World> {
    Node::action(|world: &mut World, _| {
        world.add_entity(EntityType::Bullet);
        Status::Success
    })
}

#[test]
fn wait_fires_on_fourth_half_second_tick() {
    let mut world = World::new(100.0, 100.0, 1);
    let mut tree = Tree::new(Node::wait(WaitState::fixed(2.0), marker_action()));

    let statuses: Vec<Status> = (0..4).map(|_| tree.tick(&mut world, 0.5)).collect();
    assert_eq!(
        statuses,
        vec![
            Status::Running,
            Status::Running,
            Status::Running,
            Status::Success
        ]
    );
    assert_eq!(world.count_of(EntityType::Bullet), 1);
}

#[test]
fn burst_of_three_fires_exactly_three_times() {
    let mut world = World::new(100.0, 100.0, 1);
    let mut tree = Tree::new(Node::burst(
        BurstState::new(Sample::Fixed(3), 0.3),
        marker_action(),
    ));

    assert_eq!(tree.tick(&mut world, 0.3), Status::Success);
    for _ in 0..3 {
        assert_eq!(tree.tick(&mut world, 0.3), Status::Running);
    }
    assert_eq!(world.count_of(EntityType::Bullet), 3);

    // Idle again: re-arming does not fire.
    assert_eq!(tree.tick(&mut world, 0.3), Status::Success);
    assert_eq!(world.count_of(EntityType::Bullet), 3);
}
