mod caption_selector_test;
mod subtitle_cleaner_test;
mod subtitle_service_test;
