mod check;
mod helpers;
mod options;
mod output_format;
mod statistics;
