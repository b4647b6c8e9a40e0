// tests/filter_view.rs
//
// Filter → ViewTable over a loaded canonical table, without UI.
//
use std::path::{Path, PathBuf};

use vm_analyzer::config::options::PipelineOptions;
use vm_analyzer::data::{Filter, ViewTable};
use vm_analyzer::model::Category;
use vm_analyzer::scrape::load_documents;

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures").join(name)
}

fn loaded() -> vm_analyzer::data::CanonicalTable {
    load_documents(
        &[fixture("hachiyoh_three.html"), fixture("okuraya_one.html")],
        &PipelineOptions::default(),
    )
    .table
}

fn names<'a>(v: &ViewTable<'a>) -> Vec<(usize, &'a str)> {
    v.rows().map(|(k, p)| (k, p.name.as_str())).collect()
}

#[test]
fn categories_feed_dropdown_in_label_order() {
    let table = loaded();
    assert_eq!(
        table.categories(),
        vec![Category::Coffee, Category::Water, Category::Carbonated, Category::Tea]
    );
}

#[test]
fn category_view_is_dense_and_ordered() {
    let table = loaded();
    let v = Filter::new(Some(Category::Water), "").apply(&table);

    assert_eq!(names(&v), vec![(1, "い・ろ・は・す 天然水")]);
    // canonical index stays put
    assert_eq!(v.get(1).map(|p| p.sequence_index), Some(2));
}

#[test]
fn name_filter_ignores_case_and_padding() {
    let table = loaded();
    let v = Filter::new(None, "  boss ").apply(&table);
    assert_eq!(names(&v), vec![(1, "BOSS 贅沢微糖")]);
}

#[test]
fn view_preserves_canonical_relative_order() {
    let table = loaded();
    let v = Filter::new(None, "").apply(&table);
    let canon: Vec<_> = table.products().iter().map(|p| p.name.as_str()).collect();
    let seen: Vec<_> = v.rows().map(|(_, p)| p.name.as_str()).collect();
    assert_eq!(seen, canon);

    // サイダー and ストレートティー both carry "ー"
    let sub = Filter::new(None, "ー").apply(&table);
    assert_eq!(sub.row_ix, vec![2, 3]);
    assert_eq!(names(&sub).iter().map(|(k, _)| *k).collect::<Vec<_>>(), vec![1, 2]);
}

#[test]
fn same_predicates_same_view() {
    let table = loaded();
    let f = Filter::new(Some(Category::Tea), "紅茶");
    assert_eq!(f.apply(&table).row_ix, f.apply(&table).row_ix);
    assert_eq!(f.apply(&table).display_rows(), f.apply(&table).display_rows());
}

#[test]
fn snippet_lookup_uses_view_index() {
    let table = loaded();
    let v = Filter::new(Some(Category::Carbonated), "").apply(&table);
    assert!(v.snippet(1).is_some_and(|s| s.contains("三ツ矢サイダー")));
    assert!(v.snippet(0).is_none());
    assert!(v.snippet(2).is_none());
}

#[test]
fn no_match_is_empty_view() {
    let table = loaded();
    let v = Filter::new(Some(Category::Energy), "").apply(&table);
    assert!(v.is_empty());
    assert!(v.display_rows().is_empty());
}
