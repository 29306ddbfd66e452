use branded::*;
use criterion::{Criterion, black_box, criterion_group, criterion_main};

fn bench_email_validation(c: &mut Criterion) {
    let mut group = c.benchmark_group("email_validation");

    let valid_emails = vec![
        "user@example.com",
        "test.user+tag@domain.co.uk",
        "admin@subdomain.example.com",
    ];

    let invalid_emails = vec!["invalid-email", "@example.com", "user@"];

    group.bench_function("valid_emails", |b| {
        b.iter(|| {
            for email in &valid_emails {
                assert!(is_email(black_box(email)));
            }
        })
    });

    group.bench_function("invalid_emails", |b| {
        b.iter(|| {
            for email in &invalid_emails {
                let _ = is_email(black_box(email));
            }
        })
    });

    group.finish();
}

fn bench_every_rule(c: &mut Criterion) {
    let mut group = c.benchmark_group("rules");
    warm_up();

    let samples = [
        (Kind::Url, "https://subdomain.example.com/path?query=value"),
        (Kind::Uuid, "123e4567-e89b-12d3-a456-426614174000"),
        (Kind::CreditCard, "4111111111111111"),
        (Kind::Ipv4, "192.168.100.200"),
        (Kind::Ipv6, "2001:0db8:85a3:0000:0000:8a2e:0370:7334"),
        (Kind::DateTime, "2024-06-01T08:30:00.250-04:00"),
        (Kind::Password, "abc12345xyz"),
        (Kind::Latitude, "-33.8688"),
        (Kind::Isbn, "978-0-306-40615-7"),
        (Kind::Base64, "SGVsbG8gV29ybGQ="),
        (Kind::Gender, "non-binary"),
        (Kind::Slug, "hello-world-123"),
    ];

    for (kind, value) in samples {
        group.bench_function(kind.name(), |b| b.iter(|| kind.matches(black_box(value))));
    }

    group.finish();
}

fn bench_branded_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("branded_construction");

    group.bench_function("email_parse", |b| {
        b.iter(|| Email::parse(black_box("user@example.com")))
    });

    group.bench_function("mac_from_str", |b| {
        b.iter(|| black_box("00:1A:2B:3C:4D:5E").parse::<MacAddress>())
    });

    group.bench_function("gender_from_str", |b| {
        b.iter(|| black_box("female").parse::<Gender>())
    });

    group.finish();
}

fn bench_long_input_rejection(c: &mut Criterion) {
    let mut group = c.benchmark_group("long_input");
    let long = format!("{}!", "a".repeat(64 * 1024));

    group.bench_function("slug_reject_64k", |b| b.iter(|| is_slug(black_box(&long))));
    group.bench_function("ipv6_scan_64k", |b| b.iter(|| is_ipv6(black_box(&long))));

    group.finish();
}

criterion_group!(
    benches,
    bench_email_validation,
    bench_every_rule,
    bench_branded_construction,
    bench_long_input_rejection
);
criterion_main!(benches);
