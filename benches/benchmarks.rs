#[macro_use]
extern crate criterion;

extern crate rand;

use rand::distributions::Uniform;
use rand::Rng;

extern crate dllist;
use dllist::{DLList, IndexedList};

extern crate generational_arena;
use generational_arena::Arena;

use std::collections::LinkedList;

use criterion::{Criterion, Fun};

fn criterion_benchmark(c: &mut Criterion) {
    let arena = Fun::new("arena", move |b, _| {
        let mut arena = Arena::new();

        b.iter(|| {
            arena.insert(0);
        })
    });

    let list = Fun::new("linked_list", move |b, _| {
        let mut linked_list = LinkedList::new();
        b.iter(|| {
            linked_list.push_back(0);
        })
    });

    let dl_list = Fun::new("dl_list", move |b, _| {
        let mut dl_list = DLList::new();

        b.iter(|| {
            dl_list.append(0);
        })
    });

    let indexed_list = Fun::new("indexed_list", move |b, _| {
        let mut indexed_list = IndexedList::new();

        b.iter(|| {
            indexed_list.append(0);
        })
    });

    let functions = vec![arena, list, dl_list, indexed_list];

    // no input
    c.bench_functions("append", functions, 0);

    let iterations = 100_000;

    let mut list = LinkedList::new();
    let mut dl_list = DLList::new();

    let mut rng = rand::thread_rng();
    let range = Uniform::new_inclusive(0, iterations);
    let mut numbers = rng.sample_iter(&range);

    for _ in 0..iterations {
        let number = numbers.next().unwrap();
        list.push_back(number);
        dl_list.append(number);
    }

    let needle = numbers.next().unwrap();

    let list = Fun::new("linked_list", move |b, _| {
        b.iter(|| list.iter().find(|&&n| n == needle))
    });

    let dl_list = Fun::new("dl_list", move |b, _| {
        b.iter(|| dl_list.find_node(|&n| n == needle))
    });

    let functions = vec![list, dl_list];

    // no input
    c.bench_functions("find", functions, 0);

    let positions: Vec<usize> = rand::thread_rng()
        .sample_iter(&Uniform::new(0, iterations))
        .take(1_000)
        .collect();
    let positions_too = positions.clone();

    let dl_list: DLList<_> = (0..iterations).collect();
    let indexed_list: IndexedList<_> = (0..iterations).collect();

    let dl_list = Fun::new("dl_list", move |b, _| {
        b.iter(|| {
            for &i in &positions {
                dl_list.node(i).unwrap();
            }
        })
    });

    let indexed_list = Fun::new("indexed_list", move |b, _| {
        b.iter(|| {
            for &i in &positions_too {
                indexed_list.node(i).unwrap();
            }
        })
    });

    let functions = vec![dl_list, indexed_list];

    // no input
    c.bench_functions("node_by_position", functions, 0);

    let list = Fun::new("linked_list", move |b, _| {
        let mut list = LinkedList::new();

        b.iter(|| {
            list.push_front(0);
        })
    });

    let dl_list = Fun::new("dl_list", move |b, _| {
        let mut dl_list = DLList::new();

        b.iter(|| {
            dl_list.prepend(0);
        })
    });

    let functions = vec![list, dl_list];

    // no input
    c.bench_functions("prepend", functions, 0);

    let iterations = 20_000_000;

    let mut list = LinkedList::new();
    let mut dl_list = DLList::new();

    for i in 0..iterations {
        list.push_back(i);
        dl_list.append(i);
    }

    let list = Fun::new("linked_list", move |b, _| {
        b.iter(|| {
            list.pop_front().unwrap();
        });
    });

    let dl_list = Fun::new("dl_list", move |b, _| {
        b.iter(|| {
            dl_list.pop_front().unwrap();
        });
    });

    let functions = vec![list, dl_list];

    // no input
    c.bench_functions("pop_front", functions, 0);
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
