//! Built-in catalog content.
//!
//! The static seed data the application ships with: one demonstration entry
//! per widget, grouped into the five categories, plus the gallery of larger
//! composite examples. The store treats this as an opaque data source; the
//! snippets are display text, not code this crate compiles.

use super::entry::{ExampleEntry, WidgetCategory, WidgetEntry};

/// The built-in widget demonstrations, in presentation order.
pub fn builtin_widgets() -> Vec<WidgetEntry> {
    vec![
        // Basic widgets
        WidgetEntry::new(
            "Text",
            WidgetCategory::Basic,
            "Displays text with various styling options",
            r#"let hello = Text::new("Hello World")
    .with_color(Color::BLUE)
    .with_font_size(20.0)
    .with_weight(FontWeight::Bold);"#,
        ),
        WidgetEntry::new(
            "Button",
            WidgetCategory::Basic,
            "Interactive button with different styles",
            r#"let button = Button::new("Click Me")
    .on_click(|| println!("clicked"));"#,
        ),
        WidgetEntry::new(
            "Image",
            WidgetCategory::Basic,
            "Displays images from various sources",
            r#"let image = Image::from_resource("sample.png")
    .with_description("Sample Image");"#,
        ),
        WidgetEntry::new(
            "Icon",
            WidgetCategory::Basic,
            "Displays vector icons",
            r#"let icon = Icon::new(icons::FAVORITE)
    .with_description("Favorite")
    .with_tint(Color::RED);"#,
        ),
        WidgetEntry::new(
            "Divider",
            WidgetCategory::Basic,
            "Horizontal line that separates content",
            r#"let divider = Divider::horizontal()
    .with_thickness(1.0)
    .with_color(Color::GRAY)
    .with_padding(Padding::vertical(8.0));"#,
        ),
        WidgetEntry::new(
            "Spacer",
            WidgetCategory::Basic,
            "Empty space with specified dimensions",
            r#"// Horizontal spacer
let row = Row::new()
    .child(Text::new("Left"))
    .child(Spacer::width(16.0))
    .child(Text::new("Right"));

// Vertical spacer
let column = Column::new()
    .child(Text::new("Top"))
    .child(Spacer::height(16.0))
    .child(Text::new("Bottom"));"#,
        ),
        // Layout widgets
        WidgetEntry::new(
            "Column",
            WidgetCategory::Layout,
            "Vertical arrangement of elements",
            r#"let column = Column::new()
    .with_alignment(Alignment::CenterHorizontal)
    .child(Text::new("Item 1"))
    .child(Text::new("Item 2"))
    .child(Text::new("Item 3"));"#,
        ),
        WidgetEntry::new(
            "Row",
            WidgetCategory::Layout,
            "Horizontal arrangement of elements",
            r#"let row = Row::new()
    .with_arrangement(Arrangement::SpaceEvenly)
    .child(Text::new("Left"))
    .child(Text::new("Center"))
    .child(Text::new("Right"));"#,
        ),
        WidgetEntry::new(
            "Stack",
            WidgetCategory::Layout,
            "Layers elements on top of each other",
            r#"let stack = Stack::new()
    .with_size(100.0, 100.0)
    .child(Panel::new().with_background(Color::BLUE))
    .child(
        Text::new("Centered")
            .with_color(Color::WHITE)
            .aligned(Alignment::Center),
    );"#,
        ),
        WidgetEntry::new(
            "ListView",
            WidgetCategory::Layout,
            "Vertical scrollable list that materializes rows on demand",
            r#"let list = ListView::builder(100, |index| {
    Text::new(format!("Item #{index}"))
        .with_padding(Padding::all(16.0))
});"#,
        ),
        WidgetEntry::new(
            "Carousel",
            WidgetCategory::Layout,
            "Horizontal scrollable strip that materializes items on demand",
            r#"let carousel = Carousel::builder(20, |index| {
    Card::new()
        .with_size(100.0, 100.0)
        .with_padding(Padding::all(8.0))
        .child(Text::new(format!("{index}")).aligned(Alignment::Center))
});"#,
        ),
        WidgetEntry::new(
            "Grid",
            WidgetCategory::Layout,
            "Arrange items in a grid layout",
            r#"let grid = Grid::with_columns(3)
    .with_padding(Padding::all(8.0))
    .children((0..9).map(|index| {
        Card::new()
            .with_aspect_ratio(1.0)
            .child(Text::new(format!("{index}")).aligned(Alignment::Center))
    }));"#,
        ),
        // Input widgets
        WidgetEntry::new(
            "TextField",
            WidgetCategory::Input,
            "Input field for text entry",
            r#"let field = TextField::new()
    .with_label("Label")
    .on_change(|text| println!("typed: {text}"));"#,
        ),
        WidgetEntry::new(
            "Checkbox",
            WidgetCategory::Input,
            "Boolean input control",
            r#"let checkbox = Checkbox::new("Check me")
    .on_toggle(|checked| println!("checked: {checked}"));"#,
        ),
        WidgetEntry::new(
            "RadioButton",
            WidgetCategory::Input,
            "Selection control for mutually exclusive options",
            r#"let group = RadioGroup::new(["Option 1", "Option 2", "Option 3"])
    .with_selected(0)
    .on_select(|option| println!("selected: {option}"));"#,
        ),
        WidgetEntry::new(
            "Switch",
            WidgetCategory::Input,
            "Toggle control for on/off states",
            r#"let row = Row::new()
    .with_arrangement(Arrangement::SpaceBetween)
    .child(Text::new("Enable feature"))
    .child(Switch::new().on_toggle(|on| println!("enabled: {on}")));"#,
        ),
        WidgetEntry::new(
            "Slider",
            WidgetCategory::Input,
            "Control for selecting a value from a range",
            r#"let slider = Slider::new(0.0..=100.0)
    .with_steps(10)
    .on_change(|value| println!("value: {}", value as i32));"#,
        ),
        // Container widgets
        WidgetEntry::new(
            "Card",
            WidgetCategory::Container,
            "Container with elevation and rounded corners",
            r#"let card = Card::new()
    .with_elevation(4.0)
    .with_padding(Padding::all(16.0))
    .child(
        Column::new()
            .child(Text::new("Card Title").with_style(TextStyle::TitleLarge))
            .child(Text::new("Card content goes here").with_style(TextStyle::BodyMedium)),
    );"#,
        ),
        WidgetEntry::new(
            "Panel",
            WidgetCategory::Container,
            "Basic container with themed styling",
            r#"let panel = Panel::new()
    .with_size(100.0, 100.0)
    .with_background(theme::PRIMARY)
    .with_corner_radius(8.0)
    .child(Text::new("Panel").with_color(Color::WHITE).aligned(Alignment::Center));"#,
        ),
        WidgetEntry::new(
            "Dialog",
            WidgetCategory::Container,
            "Modal window for user interactions",
            r#"let dialog = Dialog::new("Dialog Title")
    .with_body(Text::new("This is the content of the dialog."))
    .with_confirm("OK", || println!("confirmed"))
    .with_dismiss("Cancel", || println!("dismissed"));

Button::new("Show Dialog").on_click(move || dialog.open());"#,
        ),
        WidgetEntry::new(
            "BottomSheet",
            WidgetCategory::Container,
            "Panel that slides up from the bottom edge",
            r#"let sheet = BottomSheet::new()
    .child(
        Column::new()
            .with_padding(Padding::all(16.0))
            .child(Text::new("Bottom Sheet Title").with_style(TextStyle::HeadlineSmall))
            .child(Spacer::height(8.0))
            .child(Text::new("This is content inside the bottom sheet.")),
    );

Button::new("Show Bottom Sheet").on_click(move || sheet.open());"#,
        ),
        // Advanced widgets
        WidgetEntry::new(
            "TabBar",
            WidgetCategory::Advanced,
            "Row of tabs to navigate between related content",
            r#"let tabs = TabBar::new(["Tab 1", "Tab 2", "Tab 3"])
    .with_selected(0)
    .on_select(|index| println!("tab {index}"));

let content = Text::new("Content for the selected tab")
    .with_padding(Padding::all(16.0));"#,
        ),
        WidgetEntry::new(
            "Pager",
            WidgetCategory::Advanced,
            "Horizontal pager for swipeable content",
            r#"let pager = Pager::new(3, |page| {
    Card::new()
        .with_background(match page {
            0 => theme::PRIMARY,
            1 => theme::SECONDARY,
            _ => theme::TERTIARY,
        })
        .child(
            Text::new(format!("Page {}", page + 1))
                .with_style(TextStyle::HeadlineLarge)
                .with_color(Color::WHITE)
                .aligned(Alignment::Center),
        )
});

let indicator = PagerIndicator::for_pager(&pager);"#,
        ),
        WidgetEntry::new(
            "PullRefresh",
            WidgetCategory::Advanced,
            "Pull-to-refresh functionality for content",
            r#"let refresh = PullRefresh::new()
    .on_refresh(|done| {
        // Load more items, then signal completion.
        load_more_items();
        done();
    })
    .child(ListView::builder(15, |index| {
        ListItem::new(format!("Item {}", index + 1))
            .with_supporting_text("Pull to refresh to load more")
    }));"#,
        ),
        WidgetEntry::new(
            "Animation",
            WidgetCategory::Advanced,
            "Animated UI components",
            r#"let expanded = Property::new(false);

let size = Transition::new(&expanded)
    .map(|&open| if open { 200.0 } else { 100.0 });
let color = Transition::new(&expanded)
    .map(|&open| if open { theme::PRIMARY } else { theme::SECONDARY });

let panel = Panel::new()
    .with_animated_size(size)
    .with_animated_background(color)
    .on_click(move || expanded.set(!expanded.get()));"#,
        ),
        WidgetEntry::new(
            "CustomWidget",
            WidgetCategory::Advanced,
            "Composing primitives into a reusable custom widget",
            r#"fn gradient_button(text: &str, on_click: impl Fn() + 'static) -> Button {
    Button::custom(on_click)
        .with_corner_radius(16.0)
        .child(
            Panel::new()
                .with_gradient(Gradient::horizontal(
                    Color::from_rgb(0x62, 0x00, 0xee),
                    Color::from_rgb(0x37, 0x00, 0xb3),
                ))
                .with_padding(Padding::symmetric(16.0, 8.0))
                .child(Text::new(text).with_color(Color::WHITE).aligned(Alignment::Center)),
        )
}

let button = gradient_button("Custom Button", || println!("pressed"));"#,
        ),
    ]
}

/// The built-in gallery examples, in presentation order.
pub fn builtin_examples() -> Vec<ExampleEntry> {
    vec![
        ExampleEntry::new(
            "TabBar",
            "Tab Bar",
            "Shows a tabbed interface with selectable tabs and content",
            r#"let titles = ["Overview", "Details", "Settings"];
let selected = Property::new(0usize);

let tabs = TabBar::new(titles)
    .with_selected(selected.get())
    .on_select({
        let selected = selected.clone();
        move |index| selected.set(index)
    });

let content = Text::new(format!("Content for tab {}", titles[selected.get()]))
    .with_padding(Padding::all(16.0));

let screen = Column::new().child(tabs).child(content);"#,
            "TabBar",
        ),
        ExampleEntry::new(
            "Animations",
            "Animations",
            "Demonstrates various animation types and transitions",
            r#"let visible = Property::new(true);

let fade = Transition::new(&visible)
    .with_duration(Duration::from_millis(300))
    .map(|&shown| if shown { 1.0 } else { 0.0 });

let slide = Transition::new(&visible)
    .with_curve(Curve::EaseOut)
    .map(|&shown| if shown { 0.0 } else { -40.0 });

let banner = Panel::new()
    .with_animated_opacity(fade)
    .with_animated_offset_y(slide)
    .child(Text::new("Now you see me"));

let toggle = Button::new("Toggle").on_click(move || visible.set(!visible.get()));"#,
            "Animation",
        ),
        ExampleEntry::new(
            "InputWidgets",
            "Input Widgets",
            "Showcases checkboxes, radio buttons, switches, and sliders",
            r#"let form = Column::new()
    .with_spacing(12.0)
    .child(Checkbox::new("Receive updates").on_toggle(|on| println!("updates: {on}")))
    .child(
        RadioGroup::new(["Light", "Dark", "System"])
            .with_selected(2)
            .on_select(|theme| println!("theme: {theme}")),
    )
    .child(
        Row::new()
            .with_arrangement(Arrangement::SpaceBetween)
            .child(Text::new("Enable notifications"))
            .child(Switch::new().on_toggle(|on| println!("notify: {on}"))),
    )
    .child(
        Slider::new(0.0..=100.0)
            .with_steps(10)
            .on_change(|volume| println!("volume: {}", volume as i32)),
    );"#,
            "Slider",
        ),
        ExampleEntry::new(
            "CustomWidget",
            "Custom Widget",
            "Builds a reusable gradient button from layout and paint primitives",
            r#"fn badge(label: &str, count: usize) -> impl Widget {
    Row::new()
        .with_spacing(8.0)
        .child(Text::new(label))
        .child(
            Panel::new()
                .with_corner_radius(10.0)
                .with_background(theme::PRIMARY)
                .with_padding(Padding::symmetric(8.0, 2.0))
                .child(Text::new(format!("{count}")).with_color(Color::WHITE)),
        )
}

let inbox = badge("Inbox", 12);
let archive = badge("Archive", 3);"#,
            "CustomWidget",
        ),
    ]
}
