use insta::assert_snapshot;

use jump::app::navigator::USAGE;

#[test]
fn usage_text_is_stable() {
    assert_snapshot!("usage", USAGE);
}
