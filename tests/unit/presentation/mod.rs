mod test_page;
mod test_space;
