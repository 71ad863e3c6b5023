// Example: navigation against a shared scroll-surface handle.
use std::cell::Cell;
use std::rc::Rc;

use listwindow::Layout;
use listwindow_viewport::Controller;

fn main() {
    // The rendering layer owns the real scroll container; here a Cell stands
    // in for it, shared with the controller through the handle.
    let surface = Rc::new(Cell::new(0u64));

    let layout = Layout::new(10_000, 50).with_viewport_height(300);
    let mut ctl = Controller::new(layout, Rc::clone(&surface));

    let rows: Vec<String> = (0..10_000).map(|i| format!("row {i}")).collect();

    ctl.scroll_to_index(4_000);
    let frame = ctl.frame(&rows);
    println!(
        "after scroll_to_index: offset={} window={:?} offset_y={}",
        ctl.scroll_offset(),
        frame.window,
        frame.offset_y
    );

    // The user drags the surface; the controller follows.
    surface.set(surface.get() + 17);
    ctl.sync_from_surface();
    println!("after user scroll: window={:?}", ctl.window());

    ctl.scroll_to_bottom();
    println!(
        "after scroll_to_bottom: offset={} surface={}",
        ctl.scroll_offset(),
        surface.get()
    );
}
