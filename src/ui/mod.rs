// ui/mod.rs - iced Views
//
// The whole app is a single screen. Views only read `DisplayState` and emit
// `Event`s; all state changes happen in `DisplayState::apply`.

pub mod theme;

use iced::widget::{button, column, container, image, row, text, text_input, vertical_space, Column};
use iced::{Center, Element, Length};

use worldclock::{clock, DisplayState, Event, FrontEnd, COUNTRIES};

use crate::constants::{self, spacing};

/// Render the screen
pub fn view<'a>(state: &'a DisplayState, handle: &'a image::Handle) -> Element<'a, Event> {
    let date = text(format!("Today's date is {}", clock::today()))
        .size(constants::text::DATE)
        .align_x(Center);

    let greeting = button(text(state.greeting.as_str()).size(constants::text::BODY))
        .padding(spacing::PADDING)
        .style(theme::primary_button)
        .on_press(Event::ToggleGreeting);

    let picture = state.show_image.then(|| {
        image(handle.clone())
            .width(Length::Fixed(constants::image::SIZE))
            .height(Length::Fixed(constants::image::SIZE))
    });

    column![
        vertical_space().height(spacing::SECTION),
        date,
        view_location(state),
        vertical_space().height(spacing::SECTION),
        greeting,
    ]
    .push_maybe(picture)
    .spacing(spacing::PADDING)
    .padding(spacing::PADDING)
    .width(Length::Fill)
    .align_x(Center)
    .into()
}

/// Time at location, plus whichever picker the front end uses
fn view_location(state: &DisplayState) -> Element<'_, Event> {
    let time = text(state.time_at_location.message())
        .size(constants::text::TIME)
        .align_x(Center)
        .width(Length::Fill);

    let picker = match state.front_end {
        FrontEnd::Countries => view_countries(state),
        FrontEnd::FreeText => view_free_text(state),
    };

    container(
        column![time, picker]
            .spacing(spacing::PADDING)
            .align_x(Center),
    )
    .padding(spacing::PADDING)
    .width(Length::Fill)
    .style(theme::card)
    .into()
}

fn view_countries(state: &DisplayState) -> Element<'_, Event> {
    let select = button(text("Select Location").size(constants::text::BODY).align_x(Center))
        .padding(spacing::PADDING)
        .style(theme::primary_button)
        .on_press(Event::ToggleDropdown);

    let menu = state.dropdown_open.then(|| {
        let items = COUNTRIES.iter().enumerate().map(|(index, country)| {
            button(text(country.label()).size(constants::text::BODY))
                .width(Length::Fill)
                .style(theme::menu_item)
                .on_press(Event::SelectCountry(index))
                .into()
        });
        container(Column::with_children(items).spacing(2.0))
            .padding(spacing::ITEM)
            .width(Length::Fixed(220.0))
            .style(theme::menu)
    });

    Column::new()
        .push_maybe(menu)
        .push(select)
        .spacing(spacing::ITEM)
        .align_x(Center)
        .into()
}

fn view_free_text(state: &DisplayState) -> Element<'_, Event> {
    let input = text_input("Timezone, e.g. Europe/Paris", &state.location_input)
        .on_input(Event::EditLocation)
        .on_submit(Event::Compute)
        .size(constants::text::BODY)
        .padding(spacing::ITEM);

    let show = button(text("Show Time").size(constants::text::BODY))
        .padding(spacing::ITEM)
        .style(theme::primary_button)
        .on_press(Event::Compute);

    row![input, show]
        .spacing(spacing::ITEM)
        .align_y(Center)
        .into()
}
