use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use steams::prelude::*;
use steams::{assert_empty, assert_present_eq};

#[derive(Clone, Debug, PartialEq)]
struct Person {
    name: &'static str,
    age: u32,
    pets: Vec<Pet>,
}

#[derive(Clone, Debug, PartialEq)]
struct Pet {
    name: &'static str,
    kind: Kind,
    age: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
enum Kind {
    Cat,
    Dog,
    Fish,
}

fn pet(name: &'static str, kind: Kind, age: u32) -> Pet {
    Pet { name, kind, age }
}

fn people() -> Vec<Person> {
    vec![
        Person {
            name: "Carl",
            age: 34,
            pets: vec![pet("Tom", Kind::Cat, 7), pet("Rex", Kind::Dog, 3)],
        },
        Person {
            name: "Dana",
            age: 19,
            pets: vec![pet("Kitty", Kind::Cat, 2)],
        },
        Person {
            name: "Ezra",
            age: 52,
            pets: vec![],
        },
        Person {
            name: "Fay",
            age: 27,
            pets: vec![pet("Nemo", Kind::Fish, 1), pet("Max", Kind::Cat, 2)],
        },
    ]
}

#[test]
fn test_cats_of_adults() {
    let cats = seq::of(people())
        .filter(|p| p.age >= 21)
        .flat_map(|p| seq::of(p.pets))
        .filter(|pet| pet.kind == Kind::Cat)
        .map(|pet| pet.name);

    assert_eq!(cats.collect(), vec!["Tom", "Max"]);
}

#[test]
fn test_youngest_cat_keeps_first_on_tie() {
    let cats = seq::of(people())
        .flat_map(|p| seq::of(p.pets))
        .filter(|pet| pet.kind == Kind::Cat);

    let youngest = cats.compare(|a, b| a.age < b.age);
    assert_eq!(youngest.get().name, "Kitty");
}

#[test]
fn test_first_owner_with_a_dog_stops_early() {
    let inspected = RefCell::new(Vec::new());
    let owner = seq::of(people())
        .peek(|p| inspected.borrow_mut().push(p.name))
        .find(|p| p.pets.iter().any(|pet| pet.kind == Kind::Dog));

    assert_eq!(owner.get().name, "Carl");
    assert_eq!(*inspected.borrow(), vec!["Carl"]);
}

#[test]
fn test_flat_map_stop_abandons_remaining_pets() {
    let pets_seen = Cell::new(0);
    let counter = &pets_seen;
    let first_two = seq::of(people())
        .flat_map(move |p| seq::of(p.pets).peek(move |_| counter.set(counter.get() + 1)))
        .take(2);

    let names: Vec<&str> = first_two.collect().into_iter().map(|p| p.name).collect();
    assert_eq!(names, vec!["Tom", "Rex"]);
    assert_eq!(pets_seen.get(), 2);
}

#[test]
fn test_group_pets_by_kind() {
    let pets = seq::of(people()).flat_map(|p| seq::of(p.pets));

    let by_kind = pets.group_by(|pet| pet.kind);
    let cat_names = by_kind[&Kind::Cat].clone().map(|pet| pet.name).into_vec();
    assert_eq!(cat_names, vec!["Tom", "Kitty", "Max"]);

    let counts = pets.group_by_counting(|pet| pet.kind);
    assert_eq!(counts[&Kind::Cat], 3);
    assert_eq!(counts[&Kind::Dog], 1);
    assert_eq!(counts[&Kind::Fish], 1);
}

#[test]
fn test_eager_and_lazy_agree_on_owners() {
    let lazy = seq::of(people())
        .filter(|p| !p.pets.is_empty())
        .sorted(|a, b| a.age < b.age)
        .map(|p| p.name)
        .collect();

    let eager = List::of(people())
        .filter(|p| !p.pets.is_empty())
        .sorted(|a, b| a.age < b.age)
        .map(|p| p.name)
        .into_vec();

    assert_eq!(lazy, eager);
    assert_eq!(lazy, vec!["Dana", "Fay", "Carl"]);
}

#[test]
fn test_zip_names_with_ranks() {
    let names = seq::of(people()).map(|p| p.name);
    let ranks = seq::from_iter(1..=4);

    let ranked = seq::zip(names, ranks).unwrap();
    assert_eq!(ranked.last().get(), ("Fay", 4));

    let too_few = seq::from_iter(1..=3);
    let err = seq::of(people()).map(|p| p.name).zip(too_few).unwrap_err();
    assert_eq!(
        err.to_string(),
        "cannot zip sequences of different lengths: left has 4, right has 3"
    );
}

#[test]
fn test_key_value_pipeline() {
    let ages: HashMap<&str, u32> = people().into_iter().map(|p| (p.name, p.age)).collect();

    let seniors = Seq2::from_map(ages.clone())
        .filter(|_, age| *age > 30)
        .sort_by(|a, b| a.cmp(b))
        .keys()
        .collect();
    assert_eq!(seniors, vec!["Carl", "Ezra"]);

    let eager: Map<&str, u32> = Map::from(ages);
    let oldest = eager
        .clone()
        .map(|name, age| (age, name))
        .get_compared(|a, b| a > b)
        .map(|e| *e.value);
    assert_present_eq!(oldest, "Ezra");
    assert_empty!(eager.get("Gus"));
}

#[test]
fn test_to_map_and_back() {
    let pets_per_owner = seq::of(people()).to_map(|p| p.name, |p| p.pets.len());
    assert_eq!(pets_per_owner["Fay"], 2);

    let total: usize = pets_per_owner.seq().values().sum();
    assert_eq!(total, 5);
}

#[test]
fn test_partition_owners() {
    let (owners, others) = seq::of(people()).partition(|p| !p.pets.is_empty());
    assert_eq!(owners.len(), 3);
    assert_eq!(others.first().get().name, "Ezra");
}

#[test]
fn test_boxed_pipelines_by_choice() {
    fn names(only_cat_owners: bool) -> BoxedSeq<'static, &'static str> {
        let base = seq::of(people());
        if only_cat_owners {
            base.filter(|p| p.pets.iter().any(|pet| pet.kind == Kind::Cat))
                .map(|p| p.name)
                .boxed()
        } else {
            base.map(|p| p.name).boxed()
        }
    }

    assert_eq!(names(true).count(), 3);
    assert_eq!(names(false).count(), 4);
}

#[test]
fn test_from_fn_generator() {
    let fib = seq::from_fn(|step| {
        let (mut a, mut b) = (0u64, 1u64);
        loop {
            step(a)?;
            (a, b) = (b, a + b);
        }
    });

    assert_eq!((&fib).take(8).collect(), vec![0, 1, 1, 2, 3, 5, 8, 13]);
    assert_eq!(fib.find(|x| *x > 100).get(), 144);
}
