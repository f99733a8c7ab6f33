// Performance benchmarks for Torrust-Transport
// Run with: cargo bench

use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use std::net::SocketAddr;
use std::sync::Arc;
use torrust_transport::identity::structs::info_hash::InfoHash;
use torrust_transport::stats::structs::traffic_statistics::TrafficStatistics;
use torrust_transport::udp::structs::datagram_classifier::DatagramClassifier;
use torrust_transport::udp::structs::passive_handler::PassiveHandler;
use torrust_transport::utp::structs::connection_registry::ConnectionRegistry;

fn create_classifier(rt: &tokio::runtime::Runtime) -> DatagramClassifier {
    let statistics = Arc::new(TrafficStatistics::root());
    let socket = rt.block_on(tokio::net::UdpSocket::bind("127.0.0.1:0")).unwrap();
    let registry = Arc::new(ConnectionRegistry::new(Arc::new(socket), statistics.clone()));
    let dht = Arc::new(PassiveHandler::new("DHT", statistics.clone()));
    let stun = Arc::new(PassiveHandler::new("STUN", statistics));
    DatagramClassifier::new(dht, stun, registry)
}

fn bench_classify(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let classifier = create_classifier(&rt);
    let remote: SocketAddr = "127.0.0.1:6881".parse().unwrap();
    let dht = b"d1:ad2:id20:aaaaaaaaaaaaaaaaaaaae1:q4:ping1:t2:aa1:y1:qe".to_vec();
    let utp = [0x41, 0x00, 0x12, 0x34, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0];

    c.bench_function("classify_dht", |b| {
        b.iter(|| black_box(classifier.classify(black_box(&dht), remote).is_ok()));
    });
    c.bench_function("classify_utp_existing", |b| {
        b.iter(|| black_box(classifier.classify(black_box(&utp), remote).is_ok()));
    });
}

fn bench_accounting(c: &mut Criterion) {
    let root = Arc::new(TrafficStatistics::root());
    let child = TrafficStatistics::child_of(&root);

    c.bench_function("download_with_parent", |b| {
        b.iter(|| child.download(black_box(1400)));
    });
    c.bench_function("download_speed", |b| {
        b.iter(|| black_box(child.download_speed()));
    });
}

fn bench_info_hash(c: &mut Criterion) {
    c.bench_function("info_hash_from_base32", |b| {
        b.iter(|| black_box(InfoHash::from_hash(black_box("VKVKVKVKVKVKVKVKVKVKVKVKVKVKVKVK"))));
    });
}

criterion_group!(benches, bench_classify, bench_accounting, bench_info_hash);
criterion_main!(benches);
