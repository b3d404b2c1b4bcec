use criterion::{criterion_group, criterion_main, Criterion};
use http::Method;

use funcrouter::*;

fn benchmark(c: &mut Criterion) {
    let mut table = RouteTable::new();
    table.add(RouteMethod::Get, "/posts/:post_id/comments/:id", 1).unwrap();
    table.add(RouteMethod::Get, "/posts/:post_id/comments", 2).unwrap();
    table.add(RouteMethod::Get, "/posts/:post_id", 3).unwrap();
    table.add(RouteMethod::Get, "/posts", 4).unwrap();
    table.add(RouteMethod::Get, "/comments", 5).unwrap();
    table.add(RouteMethod::Get, "/comments/:id", 6).unwrap();
    table.add(RouteMethod::All, "/*splat", 7).unwrap();

    c.bench_function("/posts/n/comments/n", |b| {
        b.iter(|| table.first_match(&Method::GET, "/posts/100/comments/200"))
    });

    c.bench_function("/posts/n/comments", |b| {
        b.iter(|| table.first_match(&Method::GET, "/posts/100/comments"))
    });

    c.bench_function("/posts/n", |b| {
        b.iter(|| table.first_match(&Method::GET, "/posts/100"))
    });

    c.bench_function("/posts", |b| b.iter(|| table.first_match(&Method::GET, "/posts")));

    c.bench_function("/comments/n", |b| {
        b.iter(|| table.first_match(&Method::GET, "/comments/100"))
    });

    c.bench_function("fallthrough", |b| {
        b.iter(|| table.first_match(&Method::GET, "/a/b/c/d/e/f"))
    });

    c.bench_function("decoded params", |b| {
        b.iter(|| {
            table
                .first_match(&Method::GET, "/posts/a%20b/comments/c%2Fd")
                .map(|m| m.params().map(Params::into_owned))
        })
    });

    let mut builder = Router::builder();
    builder
        .get("/users/:id", |req: RequestContext, res: ResponseWriter| async move {
            res.json(req.params())
        })
        .unwrap();
    let router = builder.build();

    c.bench_function("router handle", |b| {
        b.iter(|| {
            futures::executor::block_on(router.handle(RequestContext::new(Method::GET, "/users/42")))
        })
    });
}

criterion_group!(benches, benchmark);
criterion_main!(benches);
