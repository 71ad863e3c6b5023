// Example: windowing a million-row list.
use listwindow::Layout;

fn main() {
    let layout = Layout::new(1_000_000, 24).with_viewport_height(600);

    let window = layout.window(123_456).expect("list is not empty");
    println!("total_height={}", layout.total_height());
    println!("window={window:?} ({} rows)", window.len());

    let rows: Vec<u32> = (0..1_000_000).collect();
    let frame = layout.frame(&rows, 123_456);
    println!("offset_y={}", frame.offset_y);
    println!("first_materialized={:?}", frame.items.first());
}
