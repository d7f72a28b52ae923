//! Type information and tables are shared read-only across threads.

use std::sync::Barrier;
use std::thread;

use vc_meta::Meta;
use vc_meta::derive::Meta;
use vc_meta::registry::MetaRegistryArc;

#[derive(Meta)]
struct Shared {
    a: u32,
    b: String,
}

#[derive(Meta)]
struct Boxed<T>(T);

const THREADS: usize = 8;

#[test]
fn type_info_is_built_once() {
    let barrier = Barrier::new(THREADS);

    let addresses: Vec<(usize, usize)> = thread::scope(|scope| {
        let handles: Vec<_> = (0..THREADS)
            .map(|index| {
                let barrier = &barrier;
                scope.spawn(move || {
                    barrier.wait();
                    let a = Shared::type_info() as *const _ as usize;
                    let b = if index % 2 == 0 {
                        <Boxed<u8>>::type_info() as *const _ as usize
                    } else {
                        <Boxed<u16>>::type_info() as *const _ as usize
                    };
                    (a, b)
                })
            })
            .collect();
        handles.into_iter().map(|handle| handle.join().unwrap()).collect()
    });

    assert!(addresses.iter().all(|&(a, _)| a == addresses[0].0));
    assert!(addresses.iter().step_by(2).all(|&(_, b)| b == addresses[0].1));
    assert!(addresses.iter().skip(1).step_by(2).all(|&(_, b)| b == addresses[1].1));
    assert_ne!(addresses[0].1, addresses[1].1);
}

#[test]
fn shared_registry() {
    let registry = MetaRegistryArc::default();

    thread::scope(|scope| {
        for _ in 0..THREADS {
            let registry = registry.clone();
            scope.spawn(move || {
                registry.write().register::<Shared>();
                let table = Shared::name_table().unwrap();
                assert_eq!(table.index_of("b"), Some(1));
            });
        }
    });

    let registry = registry.read();
    assert_eq!(registry.len(), 1);
    assert!(registry.get_with_type_name("Shared").is_some());
}
