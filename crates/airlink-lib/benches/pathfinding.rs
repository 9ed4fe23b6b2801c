use airlink_lib::{
    find_itinerary, plan_route, shortest_path, CityRegistry, Flight, FlightGraph, RouteRequest,
};
use criterion::{criterion_group, criterion_main, Criterion};
use once_cell::sync::Lazy;
use std::hint::black_box;

const CITY_COUNT: u32 = 30;

/// Ring of hubs with a shuttle every two hours plus skip-ahead shortcuts.
static NETWORK: Lazy<FlightGraph> = Lazy::new(|| {
    let city = |i: u32| format!("City{:02}", i % CITY_COUNT);
    let mut flights = Vec::new();
    let mut number = 1;
    for i in 0..CITY_COUNT {
        for slot in 0..12 {
            let departure = slot * 200;
            flights.push(Flight::new(number, city(i), city(i + 1), departure, departure + 90));
            number += 1;
        }
        flights.push(Flight::new(number, city(i), city(i + 7), 600, 900));
        number += 1;
    }
    let registry = CityRegistry::from_names((0..CITY_COUNT).map(city)).expect("registry fits");
    FlightGraph::new(registry, flights).expect("generated network is valid")
});

static BFS_REQUEST: Lazy<RouteRequest> = Lazy::new(|| RouteRequest::bfs("City00", "City20"));

fn benchmark_pathfinding(c: &mut Criterion) {
    let graph = &*NETWORK;

    c.bench_function("bfs_city00_city20", |b| {
        b.iter(|| {
            let path = shortest_path(graph, "City00", "City20").expect("route exists");
            black_box(path.len())
        });
    });

    c.bench_function("earliest_arrival_city00_city05", |b| {
        b.iter(|| {
            let itinerary = find_itinerary(graph, "City00", "City05").expect("route exists");
            black_box(itinerary.arrival())
        });
    });

    c.bench_function("plan_route_bfs_city00_city20", |b| {
        let request = &*BFS_REQUEST;
        b.iter(|| {
            let plan = plan_route(graph, request).expect("route exists");
            black_box(plan.hop_count())
        });
    });
}

criterion_group!(benches, benchmark_pathfinding);
criterion_main!(benches);
