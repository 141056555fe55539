use chrono::{TimeZone, Utc};
use newsdesk::image::ImageData;
use newsdesk::model::{ArticleDraft, Category};
use newsdesk::render::render_homepage;
use newsdesk::store::fs::FileSlot;
use newsdesk::store::{ArticleStore, DEFAULT_SLOT_KEY};
use tempfile::TempDir;

fn publish(store: &mut ArticleStore<FileSlot>, headline: &str, image: Option<ImageData>) {
    let date = Utc.with_ymd_and_hms(2024, 3, 5, 14, 30, 0).unwrap();
    let draft = ArticleDraft::new(headline, "Jane Doe", Category::Community, "<p>Body</p>")
        .with_caption("A caption")
        .with_image(image);
    draft.validate().unwrap();
    let article = draft.into_article(store.next_id(date).unwrap(), date);
    store.append(article).unwrap();
}

#[test]
fn collection_survives_a_fresh_store() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("slots");

    let mut store = ArticleStore::open(FileSlot::new(root.clone()), DEFAULT_SLOT_KEY);
    publish(&mut store, "Library reopens", None);
    let image = ImageData::from_bytes("image/jpeg", &[0xff, 0xd8, 0xff]).unwrap();
    publish(&mut store, "Parade route set", Some(image));
    let written = store.articles().to_vec();

    let reopened = ArticleStore::open(FileSlot::new(root), DEFAULT_SLOT_KEY);
    assert_eq!(reopened.articles(), written.as_slice());
    assert_eq!(reopened.articles()[0].headline, "Parade route set");
    assert_eq!(reopened.articles()[0].category, "COMMUNITY");
    assert!(reopened.articles()[1].id < reopened.articles()[0].id);

    let home = render_homepage(reopened.articles()).unwrap();
    assert!(home.hero_html.contains("data:image/jpeg;base64,/9j/"));
    assert!(home.grid_html.contains("<h3>Library reopens</h3>"));
}

#[test]
fn quota_rejection_leaves_previous_file_intact() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("slots");

    let mut store = ArticleStore::open(FileSlot::new(root.clone()).with_quota(600), DEFAULT_SLOT_KEY);
    publish(&mut store, "Fits", None);
    let before = std::fs::read_to_string(root.join("dns5_articles.json")).unwrap();

    let big = ImageData::from_bytes("image/png", &[7u8; 1024]).unwrap();
    let date = Utc::now();
    let article = ArticleDraft::new("Too big", "Ann", Category::Local, "<p>x</p>")
        .with_image(Some(big))
        .into_article(store.next_id(date).unwrap(), date);
    assert!(store.append(article).is_err());

    let after = std::fs::read_to_string(root.join("dns5_articles.json")).unwrap();
    assert_eq!(before, after);
    assert_eq!(ArticleStore::open(FileSlot::new(root), DEFAULT_SLOT_KEY).len(), 1);
}
