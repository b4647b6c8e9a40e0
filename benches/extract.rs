// benches/extract.rs
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use vm_analyzer::config::options::PipelineOptions;
use vm_analyzer::core::dom::{view_source_page, Document};
use vm_analyzer::scrape::load_texts;
use vm_analyzer::specs::Vendor;

fn okuraya_page(blocks: usize) -> String {
    let mut lines = vec![s("<link rel=\"canonical\" href=\"https://okuraya-kanekiya.com/\">")];
    for i in 0..blocks {
        lines.extend([
            s("<div class=\"drink_content\">"),
            s("  <div class=\"drink_title\">"),
            s("    <span class=\"maker\">Maker</span>"),
            format!("    缶コーヒー {i}<br>"),
            s("  </div>"),
            s("  <div class=\"cost\">"),
            s("    <span>容量</span>"),
            format!("    {}ml<br>", 185 + i % 400),
            s("    <span>価格</span>"),
            format!("    ¥{}<br>", 100 + i % 90),
            s("  </div>"),
            s("</div>"),
        ]);
    }
    view_source_page(&lines)
}

fn hachiyoh_page(items: usize) -> String {
    let mut lines = vec![s("<link rel=\"canonical\" href=\"https://www.hachiyoh.co.jp/\">")];
    for i in 0..items {
        lines.push(format!("<p class=\"productslist__price\">¥{}</p>", 100 + i % 90));
        lines.push(format!("<p class=\"productslist__name\">緑茶 {i}<br>{}ml</p>", 350 + i % 200));
    }
    view_source_page(&lines)
}

fn s(x: &str) -> String {
    x.to_string()
}

fn bench_extract(c: &mut Criterion) {
    let okuraya = okuraya_page(500);
    let hachiyoh = hachiyoh_page(500);

    c.bench_function("parse_lines_okuraya_500", |b| {
        b.iter(|| Document::parse(black_box(&okuraya)).lines().len())
    });

    let doc = Document::parse(&okuraya);
    let lines = doc.lines();
    c.bench_function("extract_okuraya_500", |b| {
        b.iter(|| Vendor::Okuraya.extract(black_box(&lines)))
    });

    let doc = Document::parse(&hachiyoh);
    let lines = doc.lines();
    c.bench_function("extract_hachiyoh_500", |b| {
        b.iter(|| Vendor::Hachiyoh.extract(black_box(&lines)))
    });

    let opts = PipelineOptions::default();
    let docs = [("a", okuraya.as_str()), ("b", hachiyoh.as_str())];
    c.bench_function("load_two_documents", |b| {
        b.iter(|| load_texts(black_box(&docs[..]), &opts))
    });
}

criterion_group!(benches, bench_extract);
criterion_main!(benches);
