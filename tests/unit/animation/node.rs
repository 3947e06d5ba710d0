use super::*;

#[test]
fn chain_links_adjacent_nodes_both_ways() {
    let nodes = AnimationNode::build_chain(5);
    assert_eq!(nodes.len(), 5);
    for (i, node) in nodes.iter().enumerate() {
        assert_eq!(node.index(), i);
        assert_eq!(node.scale(), 0.0);
    }
    assert_eq!(nodes[0].prev(), None);
    assert_eq!(nodes[0].next(), Some(1));
    assert_eq!(nodes[2].prev(), Some(1));
    assert_eq!(nodes[2].next(), Some(3));
    assert_eq!(nodes[4].next(), None);
    assert_eq!(nodes[4].prev(), Some(3));
}

#[test]
fn single_node_chain_has_no_links() {
    let nodes = AnimationNode::build_chain(1);
    assert_eq!(nodes[0].next(), None);
    assert_eq!(nodes[0].prev(), None);
    assert_eq!(nodes[0].neighbor(Direction::Forward), Neighbor::Boundary(0));
    assert_eq!(nodes[0].neighbor(Direction::Backward), Neighbor::Boundary(0));
}

#[test]
fn neighbor_reports_boundary_at_the_ends() {
    let nodes = AnimationNode::build_chain(3);
    assert_eq!(nodes[0].neighbor(Direction::Forward), Neighbor::Linked(1));
    assert_eq!(nodes[0].neighbor(Direction::Backward), Neighbor::Boundary(0));
    assert_eq!(nodes[2].neighbor(Direction::Forward), Neighbor::Boundary(2));
    assert_eq!(nodes[2].neighbor(Direction::Backward), Neighbor::Linked(1));

    let b = nodes[2].neighbor(Direction::Forward);
    assert!(b.is_boundary());
    assert_eq!(b.index(), 2);
}

#[test]
fn node_delegates_to_its_state() {
    let mut nodes = AnimationNode::build_chain(2);
    assert!(nodes[1].start_updating());
    assert!(!nodes[1].start_updating());
    assert_eq!(nodes[1].update(0.5), None);
    assert_eq!(nodes[1].scale(), 0.5);
    assert_eq!(nodes[1].update(0.5), None);
    assert_eq!(nodes[1].update(0.5), Some(1.0));
    assert_eq!(nodes[0].scale(), 0.0);
}
