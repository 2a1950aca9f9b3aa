pub mod video_status;
