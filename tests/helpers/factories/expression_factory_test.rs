use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::test_helpers::factories::FactTableFactory;
use crate::test_helpers::factory::Factory;

#[test]
fn test_random_expressions_only_use_indexed_values() {
    let fact = FactTableFactory::random(64, 2).create();
    let mut rng = StdRng::seed_from_u64(8);
    let factory = Factory::expression(&fact)
        .with_max_groups(4)
        .with_max_predicates(2);

    for _ in 0..30 {
        let expr = factory.random(&mut rng);
        assert!(expr.groups().len() <= 4);
        for group in expr.groups() {
            assert!(group.predicates().len() <= 2);
        }
        for p in expr.predicates() {
            assert!(fact.index(&p.column).unwrap().contains(&p.value));
        }
    }
}
