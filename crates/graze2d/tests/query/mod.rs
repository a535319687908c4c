mod segment_segment;
