use arbitrary::{Arbitrary, Unstructured};
use intervalmap::examples::{DemoKey, DemoValue};
use intervalmap::IntervalMap;

fn raw_bytes(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i.wrapping_mul(31).wrapping_add(7)) as u8).collect()
}

#[test]
fn arbitrary_maps_are_canonical() {
    let bytes = raw_bytes(4096);
    let mut u = Unstructured::new(&bytes);
    let map = IntervalMap::<i32, u8>::arbitrary(&mut u).unwrap();

    let mut prev = map.baseline();
    for (_, v) in map.breakpoints() {
        assert_ne!(v, prev);
        prev = v;
    }
}

#[test]
fn arbitrary_maps_are_total() {
    let bytes = raw_bytes(1024);
    let mut u = Unstructured::new(&bytes);
    let map = IntervalMap::<i64, bool>::arbitrary(&mut u).unwrap();

    for k in [-1i64 << 40, -17, 0, 17, 1 << 40] {
        let _ = map.get(&k);
    }
}

#[test]
fn arbitrary_works_with_derived_demo_types() {
    let bytes = raw_bytes(2048);
    let mut u = Unstructured::new(&bytes);
    let map = IntervalMap::<DemoKey, DemoValue>::arbitrary(&mut u).unwrap();

    let mut prev = map.baseline();
    for (_, v) in map.breakpoints() {
        assert_ne!(v, prev);
        prev = v;
    }
}
